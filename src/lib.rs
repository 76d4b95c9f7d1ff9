pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod mockup;
pub mod models;
pub mod prompt;
pub mod proxy;
pub mod session;

#[cfg(feature = "server")]
pub mod server;

pub use client::DesignClient;
pub use config::{Config, GatewayConfig};
pub use error::{DesignError, Result};
pub use gateway::{GatewayReply, HttpGateway, ImageGateway};
pub use mockup::{render as render_mockup, Mockup, PrintContent};
pub use models::*;
pub use prompt::PromptTemplate;
pub use proxy::{DesignProxy, ProxyResponse};
pub use session::{DesignSession, GenerationState, Notice, NoticeKind};
