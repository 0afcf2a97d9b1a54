//! # Leafly directory client
//!
//! Talks to the Leafly data API (`POST /strains`, `POST /locations`) and renders the returned
//! records as chat-ready text.
//!
//! - [`query`]: request bodies for the two endpoints.
//! - [`models`]: strain and store records as decoded from the API.
//! - [`format`]: pure, total record → text rendering.
//! - [`client`]: the [`Directory`] trait and its HTTP implementation [`LeaflyClient`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use leafly_client::{Directory, LeaflyClient, LeaflyConfig};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = LeaflyClient::new(LeaflyConfig::from_env()?)?;
//!     match client.search_strains("blue dream").await {
//!         Ok(strains) if strains.is_empty() => println!("nothing found"),
//!         Ok(strains) => println!("{}", strains.join("\n\n")),
//!         Err(e) => eprintln!("directory unavailable: {}", e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod query;

pub use client::{Directory, LeaflyClient};
pub use config::LeaflyConfig;
pub use error::{LeaflyError, StatusCode};
pub use format::{format_store, format_strain, star_count};
pub use models::{LocationsResponse, NamedItem, StoreRecord, StrainRecord, StrainsResponse};
pub use query::{build_location_query, build_strain_query, LocationQuery, StrainQuery};
