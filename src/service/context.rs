//! # Server Context
//!
//! Per-server state passed explicitly to connection handlers: the loaded
//! [`ServerConfig`] and, once attached, the character datastore. The
//! `send_*` helpers build a frame from that state and hand it to the
//! caller's transport in one write.
//!
//! Payload hex dumps are emitted by [`send_frame`] at TRACE level, which
//! `DebugMode` enables.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::config::ServerConfig;
use crate::core::record::Record;
use crate::error::{constants, ProtocolError, Result};
use crate::protocol::packets::{self, CryptVectors};
use crate::records::FullCharacter;
use crate::service::store::CharacterStore;
use crate::transport::{send_frame, Transport};

/// Explicit per-server state handed to connection handlers.
///
/// Holds the loaded configuration and, once attached, the datastore.
/// Nothing here is global; tests build as many contexts as they need.
#[derive(Clone)]
pub struct ServerContext {
    config: Arc<ServerConfig>,
    store: Option<Arc<dyn CharacterStore>>,
}

impl ServerContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: None,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn CharacterStore>) -> Self {
        self.attach_store(store);
        self
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn attach_store(&mut self, store: Arc<dyn CharacterStore>) {
        info!(dsn = %redacted_dsn(&self.config), "datastore attached");
        self.store = Some(store);
    }

    /// Drop the datastore handle, returning it if one was attached.
    pub fn detach_store(&mut self) -> Option<Arc<dyn CharacterStore>> {
        self.store.take()
    }

    /// The attached datastore.
    ///
    /// Using the context before a store is attached is a wiring bug in the
    /// caller, reported as [`ProtocolError::Uninitialized`].
    pub fn store(&self) -> Result<&Arc<dyn CharacterStore>> {
        self.store
            .as_ref()
            .ok_or(ProtocolError::Uninitialized(constants::ERR_DATASTORE_UNINITIALIZED))
    }

    #[instrument(skip_all, level = "debug")]
    pub fn send_welcome<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        vectors: &CryptVectors,
    ) -> Result<()> {
        let frame = packets::welcome_frame(vectors)?;
        send_frame(transport, &frame)
    }

    /// Point the client at the character server.
    #[instrument(skip_all, level = "debug")]
    pub fn send_redirect<T: Transport + ?Sized>(&self, transport: &mut T) -> Result<()> {
        let ip = self.config.hostname_bytes()?;
        let frame = packets::redirect_frame(ip, self.config.character_port)?;
        debug!(?ip, port = self.config.character_port, "redirecting");
        send_frame(transport, &frame)
    }

    /// One preview frame per occupied slot. Returns the number sent.
    #[instrument(skip(self, transport), level = "debug")]
    pub fn send_character_previews<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        guildcard: u32,
    ) -> Result<usize> {
        let previews = self.store()?.previews(guildcard)?;
        for (slot, preview) in &previews {
            let frame = packets::preview_frame(u32::from(*slot), preview)?;
            send_frame(transport, &frame)?;
        }
        Ok(previews.len())
    }

    /// Send the stored character in `slot`, or a freshly defaulted one if
    /// the slot is empty.
    #[instrument(skip(self, transport), level = "debug")]
    pub fn send_full_character<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        guildcard: u32,
        slot: u8,
    ) -> Result<()> {
        let character = match self.store()?.load_character(guildcard, slot)? {
            Some(character) => character,
            None => {
                debug!("empty slot, sending defaults");
                let mut character = FullCharacter::with_default_config();
                character.guildcard = guildcard;
                character
            }
        };
        let frame = packets::full_character_frame(&character)?;
        debug!(len = frame.len(), payload = FullCharacter::SIZE, "full character");
        send_frame(transport, &frame)
    }

    pub fn send_disconnect<T: Transport + ?Sized>(&self, transport: &mut T) -> Result<()> {
        send_frame(transport, &packets::disconnect_frame())
    }
}

fn redacted_dsn(config: &ServerConfig) -> String {
    format!(
        "{}@{}:{}/{}",
        config.db_username, config.db_host, config.db_port, config.db_name
    )
}
