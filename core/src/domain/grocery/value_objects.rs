#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateGroceryListInput {
    pub meals: Vec<String>,
}
