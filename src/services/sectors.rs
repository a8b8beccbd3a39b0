//! Sector ETF universe scanned for turning points.

/// A sector and the ETF that tracks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sector {
    pub etf: &'static str,
    pub name: &'static str,
}

/// SPDR select sector ETFs.
pub const SECTOR_ETFS: &[Sector] = &[
    Sector { etf: "XLK", name: "Technology" },
    Sector { etf: "XLF", name: "Financials" },
    Sector { etf: "XLE", name: "Energy" },
    Sector { etf: "XLV", name: "Health Care" },
    Sector { etf: "XLI", name: "Industrials" },
    Sector { etf: "XLP", name: "Consumer Staples" },
    Sector { etf: "XLY", name: "Consumer Discretionary" },
    Sector { etf: "XLU", name: "Utilities" },
    Sector { etf: "XLRE", name: "Real Estate" },
    Sector { etf: "XLC", name: "Communication Services" },
    Sector { etf: "XLB", name: "Materials" },
];
