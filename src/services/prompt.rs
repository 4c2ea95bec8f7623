//! Interactive collection of a [`GridRequest`] over any reader/writer pair

use crate::error::PromptError;
use paint_grid::{GradientKind, GridRequest, Rgb};
use std::io::{BufRead, Write};

/// Asks for every grid parameter in turn, re-asking until each answer is valid.
///
/// Generic over its streams so tests can drive it with byte slices; the CLI
/// passes locked stdin/stdout.
pub struct InputCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the full questionnaire.
    ///
    /// Order: rows, columns, gradient type, number of colors, RGB per
    /// color, palette entries per stop pair.
    pub fn collect(&mut self) -> Result<GridRequest, PromptError> {
        let (rows, cols) = self.dimensions()?;
        let gradient = self.gradient()?;
        let count = self.color_count()?;
        let stops = self.colors(count)?;
        let subdivisions = self.subdivisions()?;
        Ok(GridRequest::new(rows, cols, gradient, stops, subdivisions))
    }

    pub fn dimensions(&mut self) -> Result<(usize, usize), PromptError> {
        let rows = self.ask("Enter number of rows: ", "rows", positive)?;
        let cols = self.ask("Enter number of columns: ", "columns", positive)?;
        Ok((rows, cols))
    }

    pub fn gradient(&mut self) -> Result<GradientKind, PromptError> {
        writeln!(self.output, "\nGradient types available:")?;
        for kind in GradientKind::ALL {
            writeln!(self.output, "{}. {}", kind.menu_index(), capitalize(kind.name()))?;
        }
        self.ask("Select gradient type (1-4): ", "gradient type", |s| {
            s.parse::<GradientKind>()
                .map_err(|_| "Please select a valid option.".to_string())
        })
    }

    pub fn color_count(&mut self) -> Result<usize, PromptError> {
        self.ask(
            "How many colors do you want in your gradient? ",
            "number of colors",
            |s| match s.parse::<usize>() {
                Ok(n) if n >= 2 => Ok(n),
                Ok(_) => Err("Please enter at least 2 colors.".to_string()),
                Err(_) => Err("Please enter a valid number.".to_string()),
            },
        )
    }

    pub fn colors(&mut self, count: usize) -> Result<Vec<Rgb>, PromptError> {
        writeln!(
            self.output,
            "\nEnter RGB values for each color (0-255 for each component)"
        )?;
        (1..=count)
            .map(|i| -> Result<Rgb, PromptError> {
                let r = self.channel(i, "Red")?;
                let g = self.channel(i, "Green")?;
                let b = self.channel(i, "Blue")?;
                Ok(Rgb::new(r, g, b))
            })
            .collect()
    }

    pub fn subdivisions(&mut self) -> Result<usize, PromptError> {
        self.ask(
            "Enter the maximum number of colors to generate (e.g., 10): ",
            "number of colors to generate",
            positive,
        )
    }

    /// Hand back the streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn channel(&mut self, color: usize, name: &str) -> Result<u8, PromptError> {
        self.ask(&format!("Color {color} - {name}: "), "color channel", |s| {
            match s.parse::<i64>() {
                Ok(v) => u8::try_from(v)
                    .map_err(|_| "Please enter a value between 0 and 255.".to_string()),
                Err(_) => Err("Please enter a valid number.".to_string()),
            }
        })
    }

    /// Print `prompt`, read one line and re-ask until `check` accepts it
    fn ask<T>(
        &mut self,
        prompt: &str,
        what: &'static str,
        check: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, PromptError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::UnexpectedEof(what));
            }
            match check(line.trim()) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }
}

fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err("Please enter a positive number.".to_string()),
        Err(_) => Err("Please enter a valid number.".to_string()),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
