const INTRO: &str = "suggest 3 creative recipes I can make. For each recipe, provide:";
const FIELDS: &[&str] = &[
    "Recipe name",
    "Brief description (1 sentence)",
    "Additional ingredients needed (if any)",
    "Quick cooking time estimate",
];
const FORMAT_HEADER: &str = "Format your response as JSON only, no markdown or preamble:";
const FORMAT: &str = r#"{
  "recipes": [
    {
      "name": "Recipe Name",
      "description": "Brief description",
      "additionalIngredients": ["item1", "item2"],
      "cookingTime": "X minutes"
    }
  ]
}"#;

/// Build the user message asking for three recipes from `ingredients`.
pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    let fields = FIELDS
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{}. {}", i + 1, field))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Given these ingredients: {ingredients}, {intro}\n{fields}\n\n{format_header}\n{format}",
        ingredients = ingredients.join(", "),
        intro = INTRO,
        fields = fields,
        format_header = FORMAT_HEADER,
        format = FORMAT,
    )
}
