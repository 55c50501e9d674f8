use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::interest::InterestVector;
use crate::utils::normalize_tag;

/// Closed set of tag kinds a product can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Category,
    Attribute,
    Usage,
    Brand,
}

impl TagKind {
    /// How much this kind reveals genuine affinity versus broad
    /// classification noise. Brand never contributes to interest.
    #[must_use]
    pub fn affinity_multiplier(&self) -> f64 {
        match self {
            TagKind::Attribute => 1.0,
            TagKind::Usage => 0.5,
            TagKind::Category => 0.2,
            TagKind::Brand => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub kind: TagKind,
    pub value: String,
    /// Per-tag emphasis; treated as 1.0 when unset.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weight: Option<f64>,
}

impl Tag {
    pub fn new(kind: TagKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            weight: None,
        }
    }

    pub fn weighted(kind: TagKind, value: impl Into<String>, weight: f64) -> Self {
        Self {
            kind,
            value: value.into(),
            weight: Some(weight),
        }
    }

    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    /// Trimmed, lowercased value; the form all comparisons use.
    pub fn normalized_value(&self) -> String {
        normalize_tag(&self.value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub tags: Vec<Tag>,
    pub rating_average: f64,
    pub rating_count: i64,
    pub stock: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    /// Active and in stock; the only products candidate queries may return.
    pub fn is_available(&self) -> bool {
        self.is_active && self.stock > 0
    }
}

#[derive(Default)]
pub struct ProductBuilder {
    product_id: Option<String>,
    name: Option<String>,
    tags: Option<Vec<Tag>>,
    rating_average: Option<f64>,
    rating_count: Option<i64>,
    stock: Option<i64>,
    is_active: Option<bool>,
    created_at: Option<DateTime<Utc>>,
}

impl ProductBuilder {
    pub fn product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn rating_average(mut self, rating_average: f64) -> Self {
        self.rating_average = Some(rating_average);
        self
    }

    pub fn rating_count(mut self, rating_count: i64) -> Self {
        self.rating_count = Some(rating_count);
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn build(self) -> Product {
        Product {
            product_id: self.product_id.unwrap_or_else(|| {
                format!(
                    "prod_{}",
                    Uuid::new_v4()
                        .to_string()
                        .chars()
                        .filter(|c| *c != '-')
                        .take(12)
                        .collect::<String>()
                )
            }),
            name: self.name.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            rating_average: self.rating_average.unwrap_or(0.0),
            rating_count: self.rating_count.unwrap_or(0),
            stock: self.stock.unwrap_or(0),
            is_active: self.is_active.unwrap_or(true),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// The owning side of an interest vector. `last_login` exists for the
/// surrounding system's decay-cadence policy; the core never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub personalized_tags: InterestVector,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            personalized_tags: InterestVector::new(),
            created_at: Utc::now(),
            last_login: None,
        }
    }
}
