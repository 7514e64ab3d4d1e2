//! Writing the results to disk.
//!
//! Files are written in one go and silently replace any file of the same name.

use std::{
    fs::write,
    io::Cursor,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use image::{ImageOutputFormat, RgbaImage};

use crate::{matrix::CoverageTable, Error};

/// Lets spreadsheet applications detect the report as UTF-8.
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

const REPORT_FILE_NAME_FORMAT: &str = "%Y-%m-%d_%H%M%S.csv";

/// `2006-01-02_150405.csv` for a report written at 15:04:05 on 2 January 2006.
pub fn report_file_name(now: &DateTime<Local>) -> String {
    now.format(REPORT_FILE_NAME_FORMAT).to_string()
}

/// `__<font name>.png`
pub fn specimen_file_name(font_name: &str) -> String {
    format!("__{font_name}.png")
}

/// The table as CSV, preceded by [`UTF8_BOM`].
pub fn encode_table(table: &CoverageTable) -> Result<Vec<u8>, csv::Error> {
    let mut buf = UTF8_BOM.to_vec();

    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for record in table.records() {
            writer.write_record(&record)?;
        }
        writer.flush()?;
    }

    Ok(buf)
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)?;

    Ok(buf)
}

/// Writes the table into `dir`, named after the current time.
pub fn write_report(
    dir: &Path,
    table: &CoverageTable,
    now: &DateTime<Local>,
) -> Result<PathBuf, Error> {
    let path = dir.join(report_file_name(now));
    write(&path, encode_table(table)?)?;

    info!("Wrote {} rows to {}", table.rows().len(), path.display());

    Ok(path)
}

pub fn write_specimen(dir: &Path, font_name: &str, image: &RgbaImage) -> Result<PathBuf, Error> {
    let path = dir.join(specimen_file_name(font_name));
    write(&path, encode_png(image)?)?;

    info!("Wrote the specimen of {font_name} to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::font::testing::Listed;

    fn table() -> CoverageTable {
        let mut table = CoverageTable::new(&['"', ',', 'A']);
        table.add_font("Sans, Bold", &Listed(vec![',', 'A']));
        table.add_font("Mono", &Listed(vec!['"']));
        table
    }

    #[test]
    fn report_name_is_the_local_time() {
        let now = Local.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();

        assert_eq!(report_file_name(&now), "2006-01-02_150405.csv");
    }

    #[test_case("Roboto" => "__Roboto.png"; "plain")]
    #[test_case("Noto Sans JP" => "__Noto Sans JP.png"; "with spaces")]
    fn specimen_name(font_name: &str) -> String {
        specimen_file_name(font_name)
    }

    #[test]
    fn table_starts_with_bom() -> anyhow::Result<()> {
        let bytes = encode_table(&CoverageTable::new(&[]))?;

        assert_eq!(&bytes[..3], UTF8_BOM);
        assert_eq!(
            std::str::from_utf8(&bytes[3..])?,
            "Character,Unicode Name,Unicode Point\n"
        );
        Ok(())
    }

    #[test]
    fn fields_are_quoted() -> anyhow::Result<()> {
        let bytes = encode_table(&table())?;
        let text = std::str::from_utf8(&bytes[3..])?;

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            r#"Character,Unicode Name,Unicode Point,"Sans, Bold",Mono"#
        );
        assert_eq!(
            lines[1],
            r#""U+0022 '""'",QUOTATION MARK,U+0022,false,true"#
        );
        assert_eq!(lines[2], r#""U+002C ','",COMMA,U+002C,true,false"#);
        Ok(())
    }

    #[test]
    fn table_reads_back() -> anyhow::Result<()> {
        let table = table();
        let bytes = encode_table(&table)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&bytes[UTF8_BOM.len()..]);
        let records = reader
            .records()
            .map(|r| r.map(|r| r.iter().map(str::to_owned).collect::<Vec<_>>()))
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(records[0], table.header());
        for (record, row) in records[1..].iter().zip(table.rows()) {
            let coverage: Vec<bool> = record[3..].iter().map(|cell| cell == "true").collect();
            assert_eq!(coverage, row.coverage);
            assert_eq!(record[2], row.point());
        }
        assert_eq!(records.len(), table.rows().len() + 1);
        Ok(())
    }

    #[test]
    fn writes_overwrite() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        std::fs::write(dir.path().join("__Sans.png"), "stale")?;

        let path = write_specimen(dir.path(), "Sans", &image)?;

        assert_eq!(path, dir.path().join("__Sans.png"));
        assert!(std::fs::read(&path)?.starts_with(b"\x89PNG"));
        Ok(())
    }

    #[test]
    fn report_lands_in_dir() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let now = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap();

        let path = write_report(dir.path(), &table(), &now)?;

        assert_eq!(path, dir.path().join("2024-12-31_235958.csv"));
        assert!(std::fs::read(&path)?.starts_with(UTF8_BOM));
        Ok(())
    }
}
