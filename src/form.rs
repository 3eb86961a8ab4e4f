use crate::config::SimulationConfig;

/// One editable key/value pair of the startup form
#[derive(Debug, Clone)]
pub struct FormField {
    pub key: &'static str,
    pub value: String,
}

/// Startup parameter form collected before the simulation loop starts.
///
/// Holds raw text only; nothing reaches the simulation until `apply`
/// validates the whole batch. On any invalid field the batch is rejected,
/// the message is kept for display and every field stays editable.
#[derive(Debug, Clone)]
pub struct ParameterForm {
    pub fields: Vec<FormField>,
    pub selected: usize,
    pub error: Option<String>,
}

impl ParameterForm {
    /// Build the form pre-filled from the file config's simulation section
    pub fn from_config(config: &SimulationConfig) -> Self {
        let fields = vec![
            FormField { key: "frame_rate", value: config.frame_rate.to_string() },
            FormField { key: "occluder_radius", value: config.occluder_radius.to_string() },
            FormField { key: "occluder_speed", value: config.occluder_speed.to_string() },
            FormField { key: "light_radius", value: config.light_radius.to_string() },
            FormField { key: "light_speed", value: config.light_speed.to_string() },
            FormField { key: "ray_count", value: config.ray_count.to_string() },
            FormField { key: "ray_width", value: config.ray_width.to_string() },
        ];
        ParameterForm {
            fields,
            selected: 0,
            error: None,
        }
    }

    /// Move the selection to the next field, wrapping around
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.fields.len();
    }

    /// Move the selection to the previous field, wrapping around
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.fields.len() - 1) % self.fields.len();
    }

    /// Append a typed character to the selected field.
    /// Only characters that can appear in a number are accepted.
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.fields[self.selected].value.push(c);
        }
    }

    /// Delete the last character of the selected field
    pub fn backspace(&mut self) {
        self.fields[self.selected].value.pop();
    }

    /// Validate every field and produce the immutable simulation config.
    ///
    /// All-or-nothing: the first invalid field rejects the whole batch with
    /// a message naming it, and the error is stored for the form screen to
    /// display. No field is applied on failure.
    pub fn apply(&mut self) -> Result<SimulationConfig, String> {
        let result = self.parse_all();
        match &result {
            Ok(_) => self.error = None,
            Err(message) => self.error = Some(message.clone()),
        }
        result
    }

    fn parse_all(&self) -> Result<SimulationConfig, String> {
        let frame_rate = self.parse_positive_int("frame_rate")?;
        let occluder_radius = self.parse_positive_float("occluder_radius")?;
        let occluder_speed = self.parse_float("occluder_speed")?;
        let light_radius = self.parse_positive_float("light_radius")?;
        let light_speed = self.parse_float("light_speed")?;
        let ray_count = self.parse_positive_int("ray_count")?;
        let ray_width = self.parse_positive_float("ray_width")? as f32;

        Ok(SimulationConfig {
            frame_rate,
            occluder_radius,
            occluder_speed,
            light_radius,
            light_speed,
            ray_count,
            ray_width,
        })
    }

    fn field_value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.trim())
            .unwrap_or("")
    }

    fn parse_float(&self, key: &str) -> Result<f64, String> {
        let raw = self.field_value(key);
        raw.parse::<f64>()
            .map_err(|_| format!("Invalid value for {}: '{}' is not a number", key, raw))
    }

    fn parse_positive_float(&self, key: &str) -> Result<f64, String> {
        let value = self.parse_float(key)?;
        if value <= 0.0 {
            return Err(format!("Invalid value for {}: must be greater than 0", key));
        }
        Ok(value)
    }

    fn parse_positive_int(&self, key: &str) -> Result<u32, String> {
        let raw = self.field_value(key);
        let value = raw
            .parse::<u32>()
            .map_err(|_| format!("Invalid value for {}: '{}' is not a whole number", key, raw))?;
        if value == 0 {
            return Err(format!("Invalid value for {}: must be greater than 0", key));
        }
        Ok(value)
    }
}
