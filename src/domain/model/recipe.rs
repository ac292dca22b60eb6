use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recipe identity. Assigned by the server, always `>= 1` for stored records.
///
/// Signed so that any integer path parameter decodes and unknown ids surface
/// as "not found" rather than as a routing error.
pub type RecipeId = i64;

/// A stored recipe, as held in the recipes file and returned to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Recipe {
    #[schema(value_type = i64)]
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: String,
    /// Written as `null` when absent.
    #[serde(rename = "imgURL", default)]
    pub img_url: Option<String>,
}

/// Request body for create and update.
///
/// Carries no identity: an `id` sent by the client is dropped at decode time,
/// and the service pins the identity through [`RecipeDraft::into_recipe`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: String,
    #[serde(rename = "imgURL", default)]
    pub img_url: Option<String>,
}

impl RecipeDraft {
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            steps: self.steps,
            img_url: self.img_url,
        }
    }
}

impl Recipe {
    /// Case-insensitive substring match on `name` only.
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_ignores_client_supplied_id() {
        let draft: RecipeDraft = serde_json::from_value(json!({
            "id": 99,
            "name": "Tea",
            "ingredients": ["water", "leaves"],
            "steps": "Boil."
        }))
        .unwrap();
        let recipe = draft.into_recipe(1);
        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.img_url, None);
    }

    #[test]
    fn absent_image_serializes_as_null() {
        let recipe = Recipe {
            id: 1,
            name: "Tea".to_string(),
            ingredients: vec!["water".to_string(), "leaves".to_string()],
            steps: "Boil.".to_string(),
            img_url: None,
        };
        assert_eq!(
            serde_json::to_value(&recipe).unwrap(),
            json!({
                "id": 1,
                "name": "Tea",
                "ingredients": ["water", "leaves"],
                "steps": "Boil.",
                "imgURL": null
            })
        );
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let recipe = RecipeDraft {
            name: "Spaghetti Bolognese".to_string(),
            ingredients: vec![],
            steps: String::new(),
            img_url: Some("http://example.com/spaghetti.jpg".to_string()),
        }
        .into_recipe(3);
        assert!(recipe.name_matches("bolo"));
        assert!(!recipe.name_matches("pizza"));
    }
}
