/// Catalog API module
///
/// This module handles:
/// - Wire types for the list and detail endpoints (types.rs)
/// - The HTTP client and the `CatalogSource` seam (client.rs)
/// - The list / fan-out / join load sequence (loader.rs)
/// - Downloading and caching sprites (sprites.rs)

pub mod client;
pub mod loader;
pub mod sprites;
pub mod types;
