//! One-shot subcommands

use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use unitform_core::{Category, ConversionRecord, ConversionRequest, FormError, UnitError};
use unitform_history::{export_record, to_csv_string, ConversionLog};
use unitform_plugin::{ConvertContext, ConverterRegistry};
use unitform_units::parse_conversion;

/// Build a request, inferring the category from `from` when none is given
pub fn request(
    registry: &ConverterRegistry,
    value: f64,
    from: &str,
    to: &str,
    category: Option<&str>,
) -> Result<ConversionRequest, FormError> {
    let category = match category {
        Some(name) => name.parse::<Category>()?,
        None => registry
            .find_category(from)
            .map(|(category, _)| category)
            .ok_or_else(|| {
                FormError::from(UnitError::Parse(format!("no category has a unit named '{}'", from)))
                    .with_suggestion("Pass --category or run 'unitform categories'")
            })?,
    };
    Ok(ConversionRequest::new(category, from, to, value))
}

/// Convert, optionally append to the log, and print the record
pub fn convert<W: Write>(
    registry: &ConverterRegistry,
    ctx: &ConvertContext,
    request: &ConversionRequest,
    save: Option<&ConversionLog>,
    json: bool,
    out: &mut W,
) -> Result<ConversionRecord, FormError> {
    let record = registry.execute(request, ctx).map_err(|e| registry.explain(e))?;

    if let Some(log) = save {
        log.append(std::slice::from_ref(&record))?;
    }

    if json {
        let text = serde_json::to_string_pretty(&record)
            .map_err(|e| FormError::internal(e.to_string()))?;
        writeln!(out, "{}", text).map_err(io_error)?;
    } else {
        writeln!(
            out,
            "{} {} = {} {}",
            record.value, record.from, ctx.display(record.converted), record.to
        ).map_err(io_error)?;
    }
    Ok(record)
}

/// Parse quick conversion text and convert it
pub fn quick<W: Write>(
    registry: &ConverterRegistry,
    ctx: &ConvertContext,
    text: &str,
    save: Option<&ConversionLog>,
    json: bool,
    out: &mut W,
) -> Result<ConversionRecord, FormError> {
    let request = parse_conversion(registry, text)
        .map_err(|e| registry.explain(e).with_input(text))?;
    convert(registry, ctx, &request, save, json, out)
}

pub fn categories<W: Write>(registry: &ConverterRegistry, json: bool, out: &mut W) -> Result<(), FormError> {
    let metas = registry.metas();
    if json {
        let text = serde_json::to_string_pretty(&metas)
            .map_err(|e| FormError::internal(e.to_string()))?;
        return writeln!(out, "{}", text).map_err(io_error);
    }

    for meta in metas {
        writeln!(
            out,
            "{:<12} reference: {:<10} {}",
            meta.category.name(), meta.reference_unit, meta.description
        ).map_err(io_error)?;
    }
    Ok(())
}

pub fn units<W: Write>(
    registry: &ConverterRegistry,
    category: &str,
    json: bool,
    out: &mut W,
) -> Result<(), FormError> {
    let category: Category = category.parse()?;
    let converter = registry.converter(category)?;
    let meta = converter.meta();

    if json {
        let text = serde_json::to_string_pretty(&meta)
            .map_err(|e| FormError::internal(e.to_string()))?;
        return writeln!(out, "{}", text).map_err(io_error);
    }

    writeln!(out, "{} units:", category).map_err(io_error)?;
    for unit in meta.units {
        let aliases: Vec<&str> = meta.aliases
            .iter()
            .filter(|(_, canonical)| canonical == unit)
            .map(|(alias, _)| *alias)
            .collect();
        if aliases.is_empty() {
            writeln!(out, "  {}", unit).map_err(io_error)?;
        } else {
            writeln!(out, "  {} ({})", unit, aliases.join(", ")).map_err(io_error)?;
        }
    }
    Ok(())
}

/// Print the persisted log, as a table or as raw CSV
pub fn history<W: Write>(
    log: &ConversionLog,
    ctx: &ConvertContext,
    csv: bool,
    out: &mut W,
) -> Result<(), FormError> {
    let rows = log.read()?;

    if csv {
        let text = to_csv_string(&rows)?;
        return write!(out, "{}", text).map_err(io_error);
    }

    if rows.is_empty() {
        return writeln!(out, "No conversions in {}", log.path().display()).map_err(io_error);
    }
    for (i, row) in rows.iter().enumerate() {
        let converted = row.converted.map_or_else(String::new, |c| ctx.display(c));
        writeln!(out, "{:>4}. {} {} = {} {}", i + 1, row.value, row.from, converted, row.to)
            .map_err(io_error)?;
    }
    Ok(())
}

/// Convert and write the single-row export file
pub fn export<W: Write>(
    registry: &ConverterRegistry,
    ctx: &ConvertContext,
    request: &ConversionRequest,
    path: PathBuf,
    out: &mut W,
) -> Result<(), FormError> {
    let record = registry.execute(request, ctx).map_err(|e| registry.explain(e))?;
    export_record(&path, &record)?;
    info!(path = %path.display(), %record, "exported conversion");
    writeln!(out, "Exported {} to {}", record, path.display()).map_err(io_error)
}

fn io_error(e: std::io::Error) -> FormError {
    FormError::io_error(e.to_string())
}
