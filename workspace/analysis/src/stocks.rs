//! Static stock catalog.
//!
//! Prices are a fixed snapshot; the portal never fetches quotes from a
//! market data source.

/// A listed stock with its snapshot price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stock {
    pub symbol: &'static str,
    pub name: &'static str,
    pub current_price: f64,
}

/// The 25 stocks offered by the portal, in presentation order.
pub const CATALOG: &[Stock] = &[
    Stock { symbol: "PAYTM", name: "Paytm", current_price: 1000.0 },
    Stock { symbol: "ITC", name: "ITC Limited", current_price: 1000.0 },
    Stock { symbol: "RELIANCE", name: "Reliance Industries", current_price: 1000.0 },
    Stock { symbol: "TCS", name: "Tata Consultancy Services", current_price: 3779.40 },
    Stock { symbol: "INFOSYS", name: "Infosys", current_price: 1740.00 },
    Stock { symbol: "HDFC", name: "HDFC Limited", current_price: 2594.00 },
    Stock { symbol: "SBI", name: "State Bank of India", current_price: 729.70 },
    Stock { symbol: "HDFC Bank", name: "HDFC Bank", current_price: 1687.10 },
    Stock { symbol: "ICICI", name: "ICICI Bank", current_price: 59.98 },
    Stock { symbol: "AXISBANK", name: "Axis Bank", current_price: 761.50 },
    Stock { symbol: "KOTAKBANK", name: "Kotak Mahindra Bank", current_price: 1970.55 },
    Stock { symbol: "BHARTIARTL", name: "Bharti Airtel", current_price: 711.00 },
    Stock { symbol: "MARUTI", name: "Maruti Suzuki", current_price: 7000.00 },
    Stock { symbol: "TITAN", name: "Titan Company", current_price: 1800.00 },
    Stock { symbol: "ASIANPAINT", name: "Asian Paints", current_price: 3000.00 },
    Stock { symbol: "NESTLEIND", name: "Nestle India", current_price: 18000.00 },
    Stock { symbol: "ULTRACEMCO", name: "UltraTech Cement", current_price: 8000.00 },
    Stock { symbol: "BAJAJFINANCE", name: "Bajaj Finance", current_price: 7000.00 },
    Stock { symbol: "BAJAJFINSV", name: "Bajaj Finserv", current_price: 12000.00 },
    Stock { symbol: "SHREECEM", name: "Shree Cement", current_price: 30000.00 },
    Stock { symbol: "HCLTECH", name: "HCL Technologies", current_price: 1160.00 },
    Stock { symbol: "WIPRO", name: "Wipro Limited", current_price: 620.00 },
    Stock { symbol: "M&M", name: "Mahindra & Mahindra", current_price: 1200.00 },
    Stock { symbol: "BPCL", name: "Bharat Petroleum", current_price: 420.00 },
    Stock { symbol: "INDUSIND", name: "IndusInd Bank", current_price: 1200.00 },
];

/// Case-insensitive substring search over company names, catalog order
/// preserved. An empty query matches everything.
pub fn search(query: &str) -> Vec<&'static Stock> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|stock| stock.name.to_lowercase().contains(&needle))
        .collect()
}

/// Look up a stock by its exact symbol.
pub fn find_by_symbol(symbol: &str) -> Option<&'static Stock> {
    CATALOG.iter().find(|stock| stock.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_twenty_five_stocks() {
        assert_eq!(CATALOG.len(), 25);
    }

    #[test]
    fn search_is_case_insensitive_and_order_preserving() {
        let hits = search("BANK");
        let names: Vec<&str> = hits.iter().map(|s| s.name).collect();
        // "State Bank of India" matches the substring rule as well, ahead
        // of the retail banks.
        assert_eq!(
            names,
            vec![
                "State Bank of India",
                "HDFC Bank",
                "ICICI Bank",
                "Axis Bank",
                "Kotak Mahindra Bank",
                "IndusInd Bank",
            ]
        );
    }

    #[test]
    fn search_with_no_match_is_empty() {
        assert!(search("tesla").is_empty());
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        assert_eq!(search("").len(), CATALOG.len());
    }

    #[test]
    fn symbols_are_unique() {
        let mut symbols: Vec<&str> = CATALOG.iter().map(|s| s.symbol).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), CATALOG.len());
    }

    #[test]
    fn find_by_symbol_is_exact() {
        assert_eq!(find_by_symbol("TCS").unwrap().name, "Tata Consultancy Services");
        assert!(find_by_symbol("tcs").is_none());
    }
}
