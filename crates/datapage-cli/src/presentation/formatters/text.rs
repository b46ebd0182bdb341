/// Display name for a download extension
pub fn format_extension(extension: &str) -> String {
    match extension {
        "xls" | "xlsx" => format!("Spreadsheet ({})", extension.to_uppercase()),
        "csv" => "CSV".to_string(),
        "txt" => "Supporting information (TXT)".to_string(),
        "csvw" => "CSVW metadata".to_string(),
        other => other.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extension() {
        assert_eq!(format_extension("xlsx"), "Spreadsheet (XLSX)");
        assert_eq!(format_extension("csvw"), "CSVW metadata");
        assert_eq!(format_extension("ods"), "ODS");
    }
}
