//! The species token registry: minting and ownership transfer.
//!
//! Two parallel maps keyed by [`TokenId`]: immutable metadata, and the
//! current owner. Every minted id has exactly one owner entry at all times;
//! both maps are written together in [`TokenRegistry::mint`] and only the
//! owner map is ever touched again.

use std::collections::BTreeMap;

use xenosim_types::{Identity, TokenId, TokenRecord};

use crate::RegistryError;

/// Parameters for minting a species token.
///
/// Packs the mint arguments into a single struct to satisfy clippy's
/// argument count limit and improve call-site readability.
#[derive(Debug, Clone)]
pub struct MintParams {
    /// Display name of the species.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// The minting identity; becomes the initial owner.
    pub creator: Identity,
    /// The species this token represents.
    pub species_id: u64,
    /// Rarity score assigned at mint time.
    pub rarity_score: u32,
    /// URL of the species artwork.
    pub image_url: String,
}

/// Registry of minted species tokens and their owners.
///
/// Minting never fails and no validation is applied to the metadata fields
/// beyond their types. Transfers are gated on the current owner only --
/// there is no separate authority identity for this family.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    /// Last allocated id; 0 before the first mint.
    last_id: u64,
    /// Immutable metadata per token.
    metadata: BTreeMap<TokenId, TokenRecord>,
    /// Current owner per token.
    owners: BTreeMap<TokenId, Identity>,
}

impl TokenRegistry {
    /// Create an empty token registry.
    pub const fn new() -> Self {
        Self {
            last_id: 0,
            metadata: BTreeMap::new(),
            owners: BTreeMap::new(),
        }
    }

    /// Mint a new token owned by its creator.
    ///
    /// Allocates the next sequential id (first mint gets id 1), stores the
    /// metadata record, and records the creator as the initial owner.
    pub fn mint(&mut self, params: MintParams) -> TokenId {
        self.last_id = self.last_id.saturating_add(1);
        let id = TokenId(self.last_id);

        tracing::debug!(%id, owner = %params.creator, name = %params.name, "Minted species token");

        self.owners.insert(id, params.creator.clone());
        self.metadata.insert(
            id,
            TokenRecord {
                name: params.name,
                description: params.description,
                creator: params.creator,
                species_id: params.species_id,
                rarity_score: params.rarity_score,
                image_url: params.image_url,
            },
        );

        id
    }

    /// Transfer a token from `sender` to `recipient`.
    ///
    /// Succeeds only if `sender` is the current owner. An unknown id also
    /// fails with [`RegistryError::NotAuthorized`]: the ownership lookup
    /// yields no owner and the comparison against `sender` fails, the same
    /// way the lookup-then-compare gate behaves for a wrong owner.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthorized`] if `sender` does not own
    /// the token; ownership is left unchanged.
    pub fn transfer(
        &mut self,
        id: TokenId,
        sender: &Identity,
        recipient: Identity,
    ) -> Result<(), RegistryError> {
        if self.owners.get(&id) != Some(sender) {
            tracing::warn!(%id, actor = %sender, "Rejected token transfer: sender is not the owner");
            return Err(RegistryError::NotAuthorized {
                actor: sender.clone(),
            });
        }

        tracing::debug!(%id, from = %sender, to = %recipient, "Transferred species token");
        self.owners.insert(id, recipient);
        Ok(())
    }

    /// Return the current owner of a token, if it exists.
    pub fn owner_of(&self, id: TokenId) -> Option<&Identity> {
        self.owners.get(&id)
    }

    /// Return the metadata record for a token, if it exists.
    pub fn metadata(&self, id: TokenId) -> Option<&TokenRecord> {
        self.metadata.get(&id)
    }

    /// Return the number of minted tokens.
    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    /// Return whether no tokens have been minted.
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    /// Return the most recently allocated id, or `None` before the first mint.
    pub const fn last_id(&self) -> Option<TokenId> {
        if self.last_id == 0 {
            None
        } else {
            Some(TokenId(self.last_id))
        }
    }
}
