//! STAC items, asset signing and the fixed-item asset listing

mod item;
mod preview;
mod signing;

pub use item::{Asset, Item};
pub use preview::{asset_previews, AssetPreview, Previewer};
pub use signing::{BlobLocation, SasToken, Signer};
