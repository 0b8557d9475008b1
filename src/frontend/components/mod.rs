pub mod feature_card;
pub mod toast;

pub use feature_card::FeatureCard;
pub use toast::Toast;
