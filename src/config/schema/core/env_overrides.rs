use super::Config;

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY").or_else(|_| std::env::var("GOOGLE_API_KEY"))
            && !key.trim().is_empty()
        {
            self.provider.api_key = Some(key.trim().to_string());
        }

        if let Ok(models) = std::env::var("GEMINI_MODEL") {
            let models = split_list(&models);
            if !models.is_empty() {
                self.provider.models = models;
            }
        }

        if let Ok(versions) = std::env::var("GEMINI_API_VERSIONS") {
            let versions = split_list(&versions);
            if !versions.is_empty() {
                self.provider.api_versions = versions;
            }
        }

        if let Ok(model) = std::env::var("GEMINI_HIGH_ACCURACY_MODEL")
            && !model.trim().is_empty()
        {
            self.provider.high_accuracy_model = Some(model.trim().to_string());
        }

        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL")
            && !base_url.is_empty()
        {
            self.provider.base_url = base_url;
        }

        if let Ok(temp_str) = std::env::var("BUNTAI_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.transform.default_temperature = temp;
        }

        if let Ok(port_str) = std::env::var("BUNTAI_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) = std::env::var("BUNTAI_GATEWAY_HOST")
            && !host.is_empty()
        {
            self.gateway.host = host;
        }
    }
}
