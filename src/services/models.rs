use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub free: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub models: Vec<ModelDescriptor>,
}

const MODELS: [(&str, &str, &str, bool); 2] = [
    ("mixtral-8x7b", "Mixtral 8x7B", "Groq", true),
    ("llama2-70b", "Llama 2 70B", "Groq", true),
];

// Fixed list, order matters to callers.
pub fn catalog() -> ModelCatalog {
    let models = MODELS
        .iter()
        .map(|&(id, name, provider, free)| ModelDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            provider: provider.to_string(),
            free,
        })
        .collect();

    ModelCatalog { models }
}
