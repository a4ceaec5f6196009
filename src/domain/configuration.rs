/// Settings resolved for a single greeter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// How many times the greeting is printed.
    pub repeat_count: i64,
    /// Who is greeted. Empty until supplied positionally or acquired interactively.
    pub name: String,
    /// The user asked for usage text; every other field is ignored.
    pub help_requested: bool,
}

impl Configuration {
    /// A configuration that only asks for usage text.
    pub fn help() -> Self {
        Self { help_requested: true, ..Self::default() }
    }

    /// Whether the name still has to be acquired from the input stream.
    pub fn needs_name(&self) -> bool {
        self.name.is_empty()
    }
}
