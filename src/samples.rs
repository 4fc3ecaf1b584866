// Built-in demo documents: seven short English texts used when the CLI is
// given no input files. Several mention the US so the case-sensitive
// stop-word exception shows up in the heatmap.

pub const SAMPLE_DOCUMENTS: [&str; 7] = [
    "The US economy added jobs in March, and wages rose faster than prices for the first time in two years.",
    "Central banks in Europe kept interest rates unchanged while inflation slowly cooled across the region.",
    "Farmers in the Midwest worry that a dry spring will shrink the corn harvest and push food prices higher.",
    "The US and Canada signed a trade agreement covering lumber, dairy and electric vehicle batteries.",
    "Researchers trained a small language model on children's books and found it learned grammar surprisingly fast.",
    "A new battery chemistry promises cheaper electric vehicles, but mining the raw materials raises environmental concerns.",
    "Stock markets rallied after the jobs report, with technology shares leading the gains on Wall Street.",
];

/// The demo documents as owned strings.
pub fn sample_documents() -> Vec<String> {
    SAMPLE_DOCUMENTS.iter().map(|s| s.to_string()).collect()
}
