//! Generation pipeline managing endpoint requests on a worker thread.
//!
//! Provides a channel-based interface: the UI submits commands and polls
//! events without ever blocking a frame on the network.

use crate::generation::client::EndpointClient;
use crate::generation::config::GenerationConfig;
use crate::reply::ReplyRequest;
use crate::Result;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Commands that can be sent to the generation pipeline
#[derive(Debug, Clone)]
pub enum GenerationCommand {
    /// Generate a reply for the given request
    Generate {
        /// The email body and tone to send to the endpoint
        request: ReplyRequest,
        /// Unique request ID for tracking
        request_id: Uuid,
    },

    /// Shutdown the pipeline
    Shutdown,
}

/// Events emitted by the generation pipeline
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    /// A reply arrived from the endpoint
    Complete {
        /// The decoded reply text
        reply: String,
        /// Request ID this reply belongs to
        request_id: Uuid,
        /// Round-trip time in milliseconds
        elapsed_ms: u64,
    },

    /// The request failed (transport error or non-success status)
    Error {
        /// Error message, for the log only
        error: String,
        /// Request ID if applicable
        request_id: Option<Uuid>,
    },

    /// Pipeline has shut down
    Shutdown,
}

/// Generation pipeline with channel-based communication
pub struct GenerationPipeline {
    config: GenerationConfig,
    command_tx: Sender<GenerationCommand>,
    command_rx: Receiver<GenerationCommand>,
    event_tx: Sender<GenerationEvent>,
    event_rx: Receiver<GenerationEvent>,
}

impl GenerationPipeline {
    pub fn new(config: GenerationConfig) -> Self {
        let (command_tx, command_rx) = bounded(100);
        let (event_tx, event_rx) = bounded(100);

        Self {
            config,
            command_tx,
            command_rx,
            event_tx,
            event_rx,
        }
    }

    /// Get a sender for commands
    pub fn command_sender(&self) -> Sender<GenerationCommand> {
        self.command_tx.clone()
    }

    /// Get a receiver for events
    pub fn event_receiver(&self) -> Receiver<GenerationEvent> {
        self.event_rx.clone()
    }

    /// Start the pipeline worker thread
    ///
    /// Spawns a thread that owns the HTTP client and a tokio runtime, and
    /// handles one request at a time in arrival order.
    pub fn start_worker(self) -> Result<()> {
        let config = self.config.clone();
        let command_rx = self.command_rx.clone();
        let event_tx = self.event_tx.clone();

        std::thread::spawn(move || {
            info!("Generation pipeline worker starting");

            let runtime = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to create tokio runtime: {}", e);
                    let _ = event_tx.send(GenerationEvent::Error {
                        error: format!("Runtime creation failed: {}", e),
                        request_id: None,
                    });
                    let _ = event_tx.send(GenerationEvent::Shutdown);
                    return;
                }
            };

            let client = EndpointClient::new(config);

            info!("Generation pipeline worker ready");

            loop {
                match command_rx.recv() {
                    Ok(GenerationCommand::Generate {
                        request,
                        request_id,
                    }) => {
                        debug!("Processing generate request: {}", request_id);

                        let start_time = Instant::now();
                        let result = runtime.block_on(client.generate(&request));
                        let elapsed_ms = start_time.elapsed().as_millis() as u64;

                        match result {
                            Ok(reply) => {
                                debug!(
                                    "Generation complete: {} chars in {}ms",
                                    reply.len(),
                                    elapsed_ms
                                );
                                let _ = event_tx.send(GenerationEvent::Complete {
                                    reply,
                                    request_id,
                                    elapsed_ms,
                                });
                            }
                            Err(e) => {
                                error!("Error generating email reply: {}", e);
                                let _ = event_tx.send(GenerationEvent::Error {
                                    error: e.to_string(),
                                    request_id: Some(request_id),
                                });
                            }
                        }
                    }
                    Ok(GenerationCommand::Shutdown) | Err(_) => {
                        info!("Generation pipeline worker shutting down");
                        let _ = event_tx.send(GenerationEvent::Shutdown);
                        break;
                    }
                }
            }
        });

        Ok(())
    }
}
