//! Line-based interactive conversion form
//!
//! One command per line:
//! - `category <name>`, `from <unit>`, `to <unit>`, `value <n>`
//! - `convert`, `download [path]`, `save`
//! - `history`, `units`, `categories`, `show`, `help`, `quit`
//! - quick conversion text such as `100 km to mi`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use unitform_core::{Category, ConversionRequest, FormError, Severity};
use unitform_history::{export_row, ConversionLog, LogRow, Session};
use unitform_plugin::{ConvertContext, ConverterRegistry};
use unitform_units::{parse_conversion, parse_value};

/// Typical range of the value slider; values outside are accepted with a warning
pub const TYPICAL_RANGE: (f64, f64) = (0.0, 1000.0);

const HELP: &str = "\
Commands:
  category <name>   choose a category (resets both units)
  from <unit>       set the source unit
  to <unit>         set the target unit
  value <n>         set the value
  convert           convert the current value (value must be > 0)
  download [path]   write the current result to a single-row CSV
  save              append this session's conversions to the history log
  history           list this session's conversions
  units             list units of the current category
  categories        list categories
  show              show the form
  quit              leave the form
Or type a conversion directly, e.g. '100 km to mi'.";

/// Current selections of the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub category: Category,
    pub from: &'static str,
    pub to: &'static str,
    pub value: f64,
    /// Result of the last conversion of the current selections
    pub result: Option<f64>,
}

impl FormState {
    /// Length, first unit in both selectors, value 0
    pub fn new(registry: &ConverterRegistry) -> Result<Self, FormError> {
        let category = Category::Length;
        let first = first_unit(registry, category)?;
        Ok(Self { category, from: first, to: first, value: 0.0, result: None })
    }

    fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.category, self.from, self.to, self.value)
    }

    fn row(&self) -> LogRow {
        LogRow {
            value: self.value,
            from: self.from.to_string(),
            converted: self.result,
            to: self.to.to_string(),
        }
    }
}

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct Form<'a> {
    registry: &'a ConverterRegistry,
    ctx: ConvertContext,
    log: ConversionLog,
    export_path: PathBuf,
    autosave: bool,
    state: FormState,
}

impl<'a> Form<'a> {
    pub fn new(
        registry: &'a ConverterRegistry,
        ctx: ConvertContext,
        log: ConversionLog,
        export_path: PathBuf,
    ) -> Result<Self, FormError> {
        Ok(Self {
            registry,
            ctx,
            log,
            export_path,
            autosave: false,
            state: FormState::new(registry)?,
        })
    }

    /// Flush every successful conversion to the log immediately
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Read commands until EOF or `quit`. Errors are reported on `out` and the
    /// form keeps going unless the error is fatal.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        session: &mut Session,
        mut input: R,
        out: &mut W,
        prompt: bool,
    ) -> Result<(), FormError> {
        writeln!(out, "Unit converter. Type 'help' for commands.").map_err(io_error)?;
        self.show(out)?;

        loop {
            if prompt {
                write!(out, "> ").map_err(io_error)?;
                out.flush().map_err(io_error)?;
            }

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => {
                    debug!("end of input");
                    break;
                }
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match self.handle(session, line, out) {
                        Ok(Step::Continue) => {}
                        Ok(Step::Quit) => break,
                        Err(e) if e.severity == Severity::Fatal => return Err(e),
                        Err(e) => writeln!(out, "Error: {}", e).map_err(io_error)?,
                    }
                }
                Err(e) => return Err(io_error(e)),
            }
        }

        if !session.pending().is_empty() {
            writeln!(
                out,
                "{} conversion(s) not saved. Use 'save' next time to keep them.",
                session.pending().len()
            ).map_err(io_error)?;
        }
        Ok(())
    }

    /// Apply one command line to the form
    pub fn handle<W: Write>(
        &mut self,
        session: &mut Session,
        line: &str,
        out: &mut W,
    ) -> Result<Step, FormError> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => return Ok(Step::Quit),
            "help" | "?" => say(out, HELP)?,
            "show" => self.show(out)?,
            "categories" => self.list_categories(out)?,
            "units" => self.list_units(out)?,
            "history" => self.list_history(session, out)?,
            "category" => self.select_category(arg, out)?,
            "from" => {
                self.state.from = self.resolve(arg, "from")?;
                self.state.result = None;
            }
            "to" => {
                self.state.to = self.resolve(arg, "to")?;
                self.state.result = None;
            }
            "value" => self.set_value(arg)?,
            "convert" => self.convert(session, out)?,
            "download" => self.download(arg, out)?,
            "save" => self.save(session, out)?,
            _ if looks_numeric(line) => self.quick(session, line, out)?,
            _ => return Err(FormError::unknown_command(command).with_input(line)),
        }
        Ok(Step::Continue)
    }

    fn select_category<W: Write>(&mut self, name: &str, out: &mut W) -> Result<(), FormError> {
        let category: Category = name.parse()
            .map_err(|e| FormError::from(e).in_field("category").with_input(name))?;
        let first = first_unit(self.registry, category)?;

        self.state = FormState { category, from: first, to: first, value: self.state.value, result: None };
        debug!(%category, "category selected");
        self.list_units(out)
    }

    fn resolve(&self, name: &str, field: &str) -> Result<&'static str, FormError> {
        self.registry
            .resolve_unit(self.state.category, name)
            .map_err(|e| self.registry.explain(e).in_field(field).with_input(name))
    }

    fn set_value(&mut self, text: &str) -> Result<(), FormError> {
        let value = parse_value(text)
            .map_err(|e| FormError::from(e).in_field("value").with_input(text))?;
        warn_if_atypical(value);
        self.state.value = value;
        self.state.result = None;
        Ok(())
    }

    /// Convert the current selections. Only values greater than zero are converted.
    fn convert<W: Write>(&mut self, session: &mut Session, out: &mut W) -> Result<(), FormError> {
        if self.state.value <= 0.0 {
            return say(out, "Enter a value greater than 0 to convert.");
        }

        let record = self.registry
            .execute(&self.state.request(), &self.ctx)
            .map_err(|e| self.registry.explain(e))?;

        self.state.result = Some(record.converted);
        writeln!(out, "Converted value: {} {}", self.ctx.display(record.converted), record.to)
            .map_err(io_error)?;
        session.record(record);

        if self.autosave {
            session.flush(&self.log)?;
        }
        Ok(())
    }

    fn quick<W: Write>(&mut self, session: &mut Session, line: &str, out: &mut W) -> Result<(), FormError> {
        let request = parse_conversion(self.registry, line)
            .map_err(|e| self.registry.explain(e).with_input(line))?;
        let from = self.registry.resolve_unit(request.category, &request.from)?;
        let to = self.registry.resolve_unit(request.category, &request.to)?;
        warn_if_atypical(request.value);

        self.state = FormState { category: request.category, from, to, value: request.value, result: None };
        self.convert(session, out)
    }

    /// Export the current form, with an empty result when nothing was converted yet
    fn download<W: Write>(&self, arg: &str, out: &mut W) -> Result<(), FormError> {
        let path = if arg.is_empty() { self.export_path.clone() } else { PathBuf::from(arg) };
        export_row(&path, &self.state.row())?;
        info!(path = %path.display(), converted = self.state.result.is_some(), "exported form");
        writeln!(out, "Exported to {}", path.display()).map_err(io_error)
    }

    fn save<W: Write>(&self, session: &mut Session, out: &mut W) -> Result<(), FormError> {
        let appended = session.flush(&self.log)?;
        if appended == 0 {
            say(out, "Nothing new to save.")
        } else {
            writeln!(out, "Saved {} conversion(s) to {}", appended, self.log.path().display())
                .map_err(io_error)
        }
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<(), FormError> {
        let s = &self.state;
        let result = match s.result {
            Some(r) => format!("{} {}", self.ctx.display(r), s.to),
            None => "-".to_string(),
        };
        writeln!(
            out,
            "Category: {}\nFrom: {}\nTo: {}\nValue: {}\nResult: {}",
            s.category, s.from, s.to, s.value, result
        ).map_err(io_error)
    }

    fn list_categories<W: Write>(&self, out: &mut W) -> Result<(), FormError> {
        for meta in self.registry.metas() {
            let marker = if meta.category == self.state.category { "*" } else { " " };
            writeln!(out, "{} {:<12} {}", marker, meta.category.name(), meta.description)
                .map_err(io_error)?;
        }
        Ok(())
    }

    fn list_units<W: Write>(&self, out: &mut W) -> Result<(), FormError> {
        let units = self.registry.units(self.state.category)?;
        writeln!(out, "{} units: {}", self.state.category, units.join(", ")).map_err(io_error)
    }

    fn list_history<W: Write>(&self, session: &Session, out: &mut W) -> Result<(), FormError> {
        if session.is_empty() {
            return say(out, "No conversions yet.");
        }
        for (i, record) in session.history().iter().enumerate() {
            writeln!(
                out,
                "{:>3}. {} {} = {} {}",
                i + 1, record.value, record.from, self.ctx.display(record.converted), record.to
            ).map_err(io_error)?;
        }
        if !session.pending().is_empty() {
            writeln!(out, "({} not saved)", session.pending().len()).map_err(io_error)?;
        }
        Ok(())
    }
}

fn first_unit(registry: &ConverterRegistry, category: Category) -> Result<&'static str, FormError> {
    registry.units(category)?
        .first()
        .copied()
        .ok_or_else(|| FormError::internal(format!("{} has no units", category)))
}

fn warn_if_atypical(value: f64) {
    let (low, high) = TYPICAL_RANGE;
    if value < low || value > high {
        warn!(value, low, high, "value outside the typical slider range");
    }
}

/// Quick conversion text starts with a number
fn looks_numeric(line: &str) -> bool {
    line.chars()
        .next()
        .map_or(false, |c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
}

fn say<W: Write>(out: &mut W, text: &str) -> Result<(), FormError> {
    writeln!(out, "{}", text).map_err(io_error)
}

fn io_error(e: io::Error) -> FormError {
    FormError::io_error(e.to_string())
}
