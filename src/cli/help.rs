//! Usage text for compactor arguments

/// Usage text listing every compactor argument, with the crate version
pub fn usage() -> String {
    format!(
        "Cascading StyleSheet compactor and syntax validator (version {})\n\
         \n\
         csscompactor /IN:file [ /OUT:file ] [ /INFO:copyright ] [ /TIME:timeFormat ] [ /SYNTAX ] [ /WARNING ] [ /PRETTY ]\n\
         \n\
         \t/IN:\t\tInput File Path\n\
         \t/OUT:\t\tOutput File Path\n\
         \t/INFO:\t\tCopyright label\n\
         \t/TIME:\t\tTimeStamp Format\n\
         \t/SYNTAX\t\tSyntax checking only (no output)\n\
         \t/WARNING\tSyntax issues reported as warnings\n\
         \t/PRETTY\t\tPretty-Print the output (default is compact)\n\
         \n\
         e.g. csscompactor /IN:myFile.css /OUT:compacted/myFile.css /INFO:\"(c)2007 My CSS\" /TIME:\"'Compacted 'yyyy-MM-dd @ HH:mm\"",
        env!("CARGO_PKG_VERSION")
    )
}
