use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use hanzi_core::settings::settings;
use hanzi_core::syllable::MapTable;
use hanzi_core::{ConversionInfo, ConversionMode, PronunciationMap, SyllableTable, Transliterator};

use crate::CliError;

/// Build the engine, optionally overlaying a syllable TOML on the default
/// table and replacing the pronunciation map.
pub fn build_transliterator(
    table_file: Option<&Path>,
    pronunciation_file: Option<&Path>,
) -> Result<Transliterator, CliError> {
    let pronunciation = match pronunciation_file {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(CliError::io(path))?;
            PronunciationMap::from_toml(&content)?
        }
        None => PronunciationMap::global().clone(),
    };

    let Some(path) = table_file else {
        return Ok(Transliterator::with_default_table().with_pronunciation_map(pronunciation));
    };
    let content = fs::read_to_string(path).map_err(CliError::io(path))?;
    let overrides = MapTable::from_toml(&content)?;
    info!(entries = overrides.len(), path = %path.display(), "loaded syllable overrides");
    Ok(Transliterator::new(overlay(overrides), pronunciation))
}

#[cfg(feature = "pinyin")]
fn overlay(overrides: MapTable) -> Box<dyn SyllableTable> {
    Box::new(hanzi_core::OverlayTable::new(
        overrides,
        hanzi_core::PinyinTable,
    ))
}

#[cfg(not(feature = "pinyin"))]
fn overlay(overrides: MapTable) -> Box<dyn SyllableTable> {
    Box::new(overrides)
}

fn resolve_mode(mode: Option<ConversionMode>) -> ConversionMode {
    mode.unwrap_or(settings().conversion.mode)
}

/// Human-readable rendering of a [`ConversionInfo`].
pub fn format_info(info: &ConversionInfo, precision: usize) -> String {
    format!(
        "has_chinese:            {}\n\
         chinese_count:          {}\n\
         total_length:           {}\n\
         chinese_percentage:     {:.precision$}%\n\
         converter_available:    {}\n\
         pronunciation_map_size: {}",
        info.has_chinese,
        info.chinese_count,
        info.total_length,
        info.chinese_percentage,
        info.converter_available,
        info.pronunciation_map_size,
    )
}

/// Convert `input` line by line into `output`. Returns the number of lines
/// written.
pub fn batch_convert(
    t: &Transliterator,
    input: &Path,
    output: &Path,
    mode: ConversionMode,
) -> Result<usize, CliError> {
    let reader = BufReader::new(fs::File::open(input).map_err(CliError::io(input))?);
    let mut writer = BufWriter::new(fs::File::create(output).map_err(CliError::io(output))?);

    let mut count = 0usize;
    for line in reader.lines() {
        let line = line.map_err(CliError::io(input))?;
        writeln!(writer, "{}", t.convert(&line, mode)).map_err(CliError::io(output))?;
        count += 1;
    }
    writer.flush().map_err(CliError::io(output))?;
    info!(lines = count, %mode, "batch converted");
    Ok(count)
}

pub fn convert_cmd(
    text: &str,
    mode: Option<ConversionMode>,
    table_file: Option<&Path>,
    pronunciation_file: Option<&Path>,
) {
    let t = die!(
        build_transliterator(table_file, pronunciation_file),
        "Error: {}"
    );
    println!("{}", t.convert(text, resolve_mode(mode)));
}

pub fn info_cmd(text: &str, json: bool) {
    let t = Transliterator::with_default_table();
    let info = t.conversion_info(text);
    if json {
        let out = die!(serde_json::to_string_pretty(&info), "Error serializing info: {}");
        println!("{out}");
    } else {
        println!(
            "{}",
            format_info(&info, settings().diagnostics.percentage_precision)
        );
    }
}

pub fn batch_cmd(
    input_file: &Path,
    output_file: &Path,
    mode: Option<ConversionMode>,
    table_file: Option<&Path>,
    pronunciation_file: Option<&Path>,
) {
    let t = die!(
        build_transliterator(table_file, pronunciation_file),
        "Error: {}"
    );
    let count = die!(
        batch_convert(&t, input_file, output_file, resolve_mode(mode)),
        "Error: {}"
    );
    eprintln!("Converted {count} lines -> {}", output_file.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_table_overrides_apply() {
        let dir = tempfile::tempdir().unwrap();
        let table = write(dir.path(), "table.toml", "[syllables]\n\"你\" = \"nee\"\n");
        let t = build_transliterator(Some(&table), None).unwrap();
        assert!(t.is_available());
        assert!(t.to_pinyin_spaced("你").starts_with("nee"));
    }

    #[test]
    fn test_custom_pronunciation_file() {
        let dir = tempfile::tempdir().unwrap();
        let table = write(
            dir.path(),
            "table.toml",
            "[syllables]\n\"请\" = \"qing\"\n\"安\" = \"an\"\n",
        );
        let map = write(dir.path(), "map.toml", "[mappings]\nan = \"ahn\"\n");
        let t = build_transliterator(Some(&table), Some(&map)).unwrap();
        assert_eq!(t.to_pinyin_spaced_with_pronunciation("请安"), "qing ahn");
        assert_eq!(t.pronunciation_map().len(), 1);
    }

    #[test]
    fn test_invalid_table_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let table = write(dir.path(), "table.toml", "[syllables]\n\"你\" = \"nǐ\"\n");
        let err = build_transliterator(Some(&table), None).unwrap_err();
        assert!(matches!(err, CliError::Syllable(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = build_transliterator(Some(Path::new("/nonexistent/table.toml")), None)
            .unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/table.toml"));
    }

    #[test]
    fn test_batch_convert_lines() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "in.txt", "Hello world\n\n123\n");
        let output = dir.path().join("out.txt");
        let t = Transliterator::unavailable();
        let n = batch_convert(&t, &input, &output, ConversionMode::Spaced).unwrap();
        assert_eq!(n, 3);
        assert_eq!(fs::read_to_string(&output).unwrap(), "Hello world\n\n123\n");
    }

    #[test]
    fn test_batch_convert_with_table() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "in.txt", "请安静\nA你好B\n");
        let output = dir.path().join("out.txt");
        let t = Transliterator::new(
            MapTable::from_pairs([('请', "qing"), ('安', "an"), ('静', "jing"), ('你', "ni"), ('好', "hao")]),
            PronunciationMap::global().clone(),
        );
        batch_convert(&t, &input, &output, ConversionMode::SpacedPronunciation).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "tsing an tsing\nA ni hao B\n"
        );
    }

    #[test]
    fn test_format_info_precision() {
        let t = Transliterator::unavailable();
        let out = format_info(&t.conversion_info("你ab"), 2);
        assert!(out.contains("chinese_percentage:     33.33%"));
        assert!(out.contains("converter_available:    false"));
    }

    #[test]
    fn test_resolve_mode_defaults_to_settings() {
        assert_eq!(resolve_mode(None), settings().conversion.mode);
        assert_eq!(
            resolve_mode(Some(ConversionMode::Compact)),
            ConversionMode::Compact
        );
    }
}
