//! Text rendering of the kitchen state for the terminal.

use crate::kitchen::{Kitchen, RequestState};
use crate::pantry::IngredientList;
use crate::recipe::Recipe;

/// Ingredient chips on one line, e.g. `[chicken] [garlic]`.
pub fn ingredients(list: &IngredientList) -> String {
    if list.is_empty() {
        return "  (no ingredients yet, type one and press Enter)".to_string();
    }
    let chips = list
        .iter()
        .map(|i| format!("[{i}]"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("  {chips}")
}

/// A single recipe card.
pub fn recipe_card(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {}\n", recipe.name));
    out.push_str(&format!("  {}\n", recipe.description));
    if !recipe.additional_ingredients.is_empty() {
        out.push_str("\n  Additional Ingredients:\n");
        for item in &recipe.additional_ingredients {
            out.push_str(&format!("    • {item}\n"));
        }
    }
    out.push_str("\n  Cooking Time:\n");
    out.push_str(&format!("    {}\n", recipe.cooking_time));
    out
}

/// All recipe cards under a heading. Empty input renders nothing.
pub fn recipes(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return String::new();
    }
    let cards = recipes
        .iter()
        .map(recipe_card)
        .collect::<Vec<_>>()
        .join("\n  ───\n\n");
    format!("\nYour Recipes\n\n{cards}")
}

/// Label of the submit action for the current state.
pub fn submit_label(kitchen: &Kitchen) -> &'static str {
    if kitchen.state().is_loading() {
        "Finding Recipes..."
    } else {
        "Find Recipes"
    }
}

/// What to print after a search settles.
pub fn outcome(state: &RequestState) -> String {
    match state {
        RequestState::Idle => String::new(),
        RequestState::Loading => "  finding recipes...".to_string(),
        RequestState::Failed(message) => format!("  ✗ {message}"),
        RequestState::Succeeded(list) if list.is_empty() => "  no recipes suggested".to_string(),
        RequestState::Succeeded(list) => recipes(list),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stir_fry() -> Recipe {
        Recipe {
            name: "Stir Fry".to_string(),
            description: "Quick veggie stir fry".to_string(),
            additional_ingredients: vec!["soy sauce".to_string()],
            cooking_time: "15 minutes".to_string(),
        }
    }

    #[test]
    fn empty_ingredients_hint() {
        assert!(ingredients(&IngredientList::new()).contains("no ingredients"));
    }

    #[test]
    fn ingredients_render_as_chips_in_order() {
        let mut list = IngredientList::new();
        list.add("chicken");
        list.add("garlic");
        assert_eq!(ingredients(&list), "  [chicken] [garlic]");
    }

    #[test]
    fn card_shows_all_fields() {
        let card = recipe_card(&stir_fry());
        assert!(card.contains("Stir Fry"));
        assert!(card.contains("Quick veggie stir fry"));
        assert!(card.contains("Additional Ingredients:"));
        assert!(card.contains("• soy sauce"));
        assert!(card.contains("Cooking Time:"));
        assert!(card.contains("15 minutes"));
    }

    #[test]
    fn card_omits_empty_additional_ingredients() {
        let recipe = Recipe {
            additional_ingredients: vec![],
            ..stir_fry()
        };
        assert!(!recipe_card(&recipe).contains("Additional Ingredients"));
    }

    #[test]
    fn recipes_heading_only_when_present() {
        assert_eq!(recipes(&[]), "");
        assert!(recipes(&[stir_fry()]).contains("Your Recipes"));
    }

    #[test]
    fn submit_label_follows_loading() {
        let mut kitchen = Kitchen::new();
        assert_eq!(submit_label(&kitchen), "Find Recipes");
        kitchen.add_ingredient("egg");
        kitchen.begin_search().unwrap();
        assert_eq!(submit_label(&kitchen), "Finding Recipes...");
    }

    #[test]
    fn outcome_renders_error_line() {
        let text = outcome(&RequestState::Failed("boom".to_string()));
        assert_eq!(text, "  ✗ boom");
    }

    #[test]
    fn outcome_renders_recipes() {
        let text = outcome(&RequestState::Succeeded(vec![stir_fry()]));
        assert!(text.contains("Stir Fry"));
        assert!(outcome(&RequestState::Succeeded(vec![])).contains("no recipes"));
        assert_eq!(outcome(&RequestState::Idle), "");
    }
}
