use serde::{Deserialize, Serialize};

use super::{Category, Model, ModelId, Purpose};
use crate::error::AppError;

/// Raw recommendation request body as posted by clients
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendBody {
    #[serde(default)]
    pub min_price: Option<i32>,
    #[serde(default)]
    pub max_price: Option<i32>,
    #[serde(default)]
    pub adults_count: u32,
    #[serde(default)]
    pub kids_count: u32,
    pub priority1: String,
    pub priority2: String,
    pub purpose: String,
}

/// Validated buyer constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub adults: u32,
    pub kids: u32,
    pub min_price: Option<i32>,
    pub max_price: Option<i32>,
    pub priority1: Category,
    pub priority2: Category,
    pub purpose: Purpose,
}

impl RecommendationRequest {
    /// Total number of passengers
    pub fn party_size(&self) -> i64 {
        i64::from(self.adults) + i64::from(self.kids)
    }
}

impl TryFrom<RecommendBody> for RecommendationRequest {
    type Error = AppError;

    fn try_from(body: RecommendBody) -> Result<Self, Self::Error> {
        Ok(Self {
            adults: body.adults_count,
            kids: body.kids_count,
            min_price: body.min_price,
            max_price: body.max_price,
            priority1: body.priority1.parse()?,
            priority2: body.priority2.parse()?,
            purpose: body.purpose.parse()?,
        })
    }
}

/// A recommended model with the review facts that explain the pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedModel {
    pub id: ModelId,
    pub name: String,
    pub description: String,
    #[serde(rename = "informationURL")]
    pub information_url: String,
    pub price: i32,
    /// Category the model's reviewers rated highest
    pub priority: Category,
    pub priority_percent: i32,
    /// Purpose most of the model's reviewers declared
    pub purpose: Purpose,
    pub purpose_percent: i32,
}

impl From<&Model> for RecommendedModel {
    fn from(model: &Model) -> Self {
        let priority = model.best_priority();
        let purpose = model.best_purpose();

        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            information_url: model.information_url.clone(),
            price: model.price,
            priority,
            priority_percent: model.priority_percent(priority) as i32,
            purpose,
            purpose_percent: model.purpose_percent(purpose) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::car_model::fixtures::reviewed;

    #[test]
    fn test_body_converts_korean_labels() {
        let body: RecommendBody = serde_json::from_value(serde_json::json!({
            "minPrice": 2000,
            "maxPrice": 4000,
            "adultsCount": 2,
            "kidsCount": 1,
            "priority1": "연비",
            "priority2": "디자인",
            "purpose": "주말여행"
        }))
        .unwrap();

        let request = RecommendationRequest::try_from(body).unwrap();
        assert_eq!(request.priority1, Category::Mileage);
        assert_eq!(request.priority2, Category::Design);
        assert_eq!(request.purpose, Purpose::WeekendTrip);
        assert_eq!(request.party_size(), 3);
        assert_eq!(request.min_price, Some(2000));
    }

    #[test]
    fn test_body_with_unknown_priority_is_rejected() {
        let body: RecommendBody = serde_json::from_value(serde_json::json!({
            "priority1": "mileage",
            "priority2": "towing",
            "purpose": "commute"
        }))
        .unwrap();

        let err = RecommendationRequest::try_from(body).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_missing_budget_stays_unset() {
        let body: RecommendBody = serde_json::from_value(serde_json::json!({
            "minPrice": null,
            "adultsCount": 1,
            "priority1": "fun",
            "priority2": "design",
            "purpose": "drive"
        }))
        .unwrap();

        let request = RecommendationRequest::try_from(body).unwrap();
        assert_eq!(request.min_price, None);
        assert_eq!(request.max_price, None);
        assert_eq!(request.kids, 0);
    }

    #[test]
    fn test_recommended_model_explains_best_keyword() {
        let mut model = reviewed(3, "Tucson", 3200, 5, 10, 15);
        model.safe_sum = 24;
        model.long_count = 7;
        model.work_count = 3;

        let recommended = RecommendedModel::from(&model);
        assert_eq!(recommended.priority, Category::Safety);
        assert_eq!(recommended.priority_percent, 80);
        assert_eq!(recommended.purpose, Purpose::LongDistance);
        assert_eq!(recommended.purpose_percent, 70);
        assert_eq!(recommended.price, 3200);
    }
}
