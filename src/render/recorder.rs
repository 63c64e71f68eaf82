use super::Renderer;

/// One call made on a [`Renderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
    Arc { cx: f64, cy: f64, r: f64, a0: f64, a1: f64 },
    Fill,
    SetColor { r: f64, g: f64, b: f64 },
    Save,
    Restore,
    Clip,
}

/// A renderer that only records the calls it receives, for headless use
/// and inspection.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<Command>,
}

impl CommandRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of recorded commands matching `pred`.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for CommandRecorder {
    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, a0: f64, a1: f64) {
        self.commands.push(Command::Arc { cx, cy, r, a0, a1 });
    }

    fn fill(&mut self) {
        self.commands.push(Command::Fill);
    }

    fn set_source_color(&mut self, r: f64, g: f64, b: f64) {
        self.commands.push(Command::SetColor { r, g, b });
    }

    fn save(&mut self) {
        self.commands.push(Command::Save);
    }

    fn restore(&mut self) {
        self.commands.push(Command::Restore);
    }

    fn clip(&mut self) {
        self.commands.push(Command::Clip);
    }
}
