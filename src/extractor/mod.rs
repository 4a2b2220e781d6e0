pub mod mock;
pub mod models;
pub mod traits;
pub mod validator;

pub use mock::{standard_qualities, MockTikTokExtractor};
pub use models::{QualityOption, VideoInfo};
pub use traits::Extractor;
pub use validator::{is_supported_url, validate_url};
