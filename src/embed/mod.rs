pub mod blob_store;
pub mod builder;
pub mod models;
pub mod transcode;

pub use blob_store::{BlobStore, XrpcBlobStore};
pub use builder::EmbedBuilder;
pub use models::{BlobRef, EmbedMain, EmbedSelection, EmbedView, SelectedEmbed};
pub use transcode::{JpegTranscoder, Transcoder};
