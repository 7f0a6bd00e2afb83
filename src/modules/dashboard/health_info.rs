//! Public health-information page: static sections plus the tip feed.

use async_trait::async_trait;

use crate::modules::store::ports::{HealthTipFeed, StoreError};
use crate::modules::store::records::HealthTip;

/// Static informational copy shown on the public page. Seed content,
/// not store-backed.
pub const INFO_SECTIONS: &[(&str, &str)] = &[
    (
        "Daily Movement",
        "Aim for around 10,000 steps a day. Short walks after meals count and \
         add up quickly.",
    ),
    (
        "Hydration",
        "Eight glasses of water a day keeps energy and concentration steady. \
         More on hot days or when exercising.",
    ),
    (
        "Sleep",
        "Adults do best on 7 to 9 hours per night. A consistent bedtime matters \
         as much as the total.",
    ),
    (
        "Preventive Care",
        "Keep routine checkups, dental cleanings, and lab work on schedule even \
         when you feel fine.",
    ),
];

#[async_trait]
pub trait IFetchHealthTipsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<HealthTip>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct FetchHealthTipsUseCase<H>
where
    H: HealthTipFeed,
{
    tips: H,
}

impl<H> FetchHealthTipsUseCase<H>
where
    H: HealthTipFeed,
{
    pub fn new(tips: H) -> Self {
        Self { tips }
    }
}

#[async_trait]
impl<H> IFetchHealthTipsUseCase for FetchHealthTipsUseCase<H>
where
    H: HealthTipFeed,
{
    async fn execute(&self) -> Result<Vec<HealthTip>, StoreError> {
        self.tips.health_tips().await
    }
}
