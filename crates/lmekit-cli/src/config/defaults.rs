pub struct DefaultsConfig {
    pub obabel: String,
    pub python: String,
    pub forcefield: String,
    pub max_steps: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            obabel: "obabel".to_string(),
            python: "python3".to_string(),
            forcefield: "MMFF94".to_string(),
            max_steps: 2500,
        }
    }
}
