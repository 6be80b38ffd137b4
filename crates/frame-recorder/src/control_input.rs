/// A parsed line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlInput {
    /// `r` / `record`: start recording if idle, stop if recording.
    ToggleRecording,
    /// `c` / `clear`: discard the recording so far.
    Clear,
    /// `o <degrees>` / `orientation <degrees>`; `o ?` reports unknown.
    Orientation(Option<u32>),
    /// `q` / `quit`.
    Quit,
}

impl ControlInput {
    /// Parse one input line. Blank or unrecognised lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?.to_ascii_lowercase();

        match command.as_str() {
            "r" | "record" => Some(Self::ToggleRecording),
            "c" | "clear" => Some(Self::Clear),
            "q" | "quit" | "exit" => Some(Self::Quit),
            "o" | "orientation" => match words.next()? {
                "?" | "unknown" => Some(Self::Orientation(None)),
                degrees => degrees.parse().ok().map(|d| Self::Orientation(Some(d))),
            },
            _ => None,
        }
    }
}
