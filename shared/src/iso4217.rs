// ISO 4217 active currency table with Malaysian-English display symbols

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iso4217Entry {
    pub code: &'static str,
    pub minor_units: u8,
    pub symbol: &'static str,
}

const fn entry(code: &'static str, minor_units: u8, symbol: &'static str) -> Iso4217Entry {
    Iso4217Entry {
        code,
        minor_units,
        symbol,
    }
}

/// Malaysian Ringgit.
pub const RINGGIT: Iso4217Entry = entry("MYR", 2, "RM");

/// Active currencies, sorted by code so lookups can binary search.
///
/// Where the locale has no dedicated symbol the code itself is used.
/// Precious metals and the testing codes (`XTS`, `XXX`) are left out because
/// they cannot be a donation currency.
pub static CURRENCIES: &[Iso4217Entry] = &[
    entry("AED", 2, "AED"),
    entry("AFN", 2, "AFN"),
    entry("ALL", 2, "ALL"),
    entry("AMD", 2, "AMD"),
    entry("ANG", 2, "ANG"),
    entry("AOA", 2, "AOA"),
    entry("ARS", 2, "ARS"),
    entry("AUD", 2, "A$"),
    entry("AWG", 2, "AWG"),
    entry("AZN", 2, "AZN"),
    entry("BAM", 2, "BAM"),
    entry("BBD", 2, "BBD"),
    entry("BDT", 2, "BDT"),
    entry("BGN", 2, "BGN"),
    entry("BHD", 3, "BHD"),
    entry("BIF", 0, "BIF"),
    entry("BMD", 2, "BMD"),
    entry("BND", 2, "BND"),
    entry("BOB", 2, "BOB"),
    entry("BOV", 2, "BOV"),
    entry("BRL", 2, "R$"),
    entry("BSD", 2, "BSD"),
    entry("BTN", 2, "BTN"),
    entry("BWP", 2, "BWP"),
    entry("BYN", 2, "BYN"),
    entry("BZD", 2, "BZD"),
    entry("CAD", 2, "CA$"),
    entry("CDF", 2, "CDF"),
    entry("CHE", 2, "CHE"),
    entry("CHF", 2, "CHF"),
    entry("CHW", 2, "CHW"),
    entry("CLF", 4, "CLF"),
    entry("CLP", 0, "CLP"),
    entry("CNY", 2, "CN¥"),
    entry("COP", 2, "COP"),
    entry("COU", 2, "COU"),
    entry("CRC", 2, "CRC"),
    entry("CUP", 2, "CUP"),
    entry("CVE", 2, "CVE"),
    entry("CZK", 2, "CZK"),
    entry("DJF", 0, "DJF"),
    entry("DKK", 2, "DKK"),
    entry("DOP", 2, "DOP"),
    entry("DZD", 2, "DZD"),
    entry("EGP", 2, "EGP"),
    entry("ERN", 2, "ERN"),
    entry("ETB", 2, "ETB"),
    entry("EUR", 2, "€"),
    entry("FJD", 2, "FJD"),
    entry("FKP", 2, "FKP"),
    entry("GBP", 2, "£"),
    entry("GEL", 2, "GEL"),
    entry("GHS", 2, "GHS"),
    entry("GIP", 2, "GIP"),
    entry("GMD", 2, "GMD"),
    entry("GNF", 0, "GNF"),
    entry("GTQ", 2, "GTQ"),
    entry("GYD", 2, "GYD"),
    entry("HKD", 2, "HK$"),
    entry("HNL", 2, "HNL"),
    entry("HTG", 2, "HTG"),
    entry("HUF", 2, "HUF"),
    entry("IDR", 2, "IDR"),
    entry("ILS", 2, "₪"),
    entry("INR", 2, "₹"),
    entry("IQD", 3, "IQD"),
    entry("IRR", 2, "IRR"),
    entry("ISK", 0, "ISK"),
    entry("JMD", 2, "JMD"),
    entry("JOD", 3, "JOD"),
    entry("JPY", 0, "¥"),
    entry("KES", 2, "KES"),
    entry("KGS", 2, "KGS"),
    entry("KHR", 2, "KHR"),
    entry("KMF", 0, "KMF"),
    entry("KPW", 2, "KPW"),
    entry("KRW", 0, "₩"),
    entry("KWD", 3, "KWD"),
    entry("KYD", 2, "KYD"),
    entry("KZT", 2, "KZT"),
    entry("LAK", 2, "LAK"),
    entry("LBP", 2, "LBP"),
    entry("LKR", 2, "LKR"),
    entry("LRD", 2, "LRD"),
    entry("LSL", 2, "LSL"),
    entry("LYD", 3, "LYD"),
    entry("MAD", 2, "MAD"),
    entry("MDL", 2, "MDL"),
    entry("MGA", 2, "MGA"),
    entry("MKD", 2, "MKD"),
    entry("MMK", 2, "MMK"),
    entry("MNT", 2, "MNT"),
    entry("MOP", 2, "MOP"),
    entry("MRU", 2, "MRU"),
    entry("MUR", 2, "MUR"),
    entry("MVR", 2, "MVR"),
    entry("MWK", 2, "MWK"),
    entry("MXN", 2, "MX$"),
    entry("MXV", 2, "MXV"),
    RINGGIT,
    entry("MZN", 2, "MZN"),
    entry("NAD", 2, "NAD"),
    entry("NGN", 2, "NGN"),
    entry("NIO", 2, "NIO"),
    entry("NOK", 2, "NOK"),
    entry("NPR", 2, "NPR"),
    entry("NZD", 2, "NZ$"),
    entry("OMR", 3, "OMR"),
    entry("PAB", 2, "PAB"),
    entry("PEN", 2, "PEN"),
    entry("PGK", 2, "PGK"),
    entry("PHP", 2, "₱"),
    entry("PKR", 2, "PKR"),
    entry("PLN", 2, "PLN"),
    entry("PYG", 0, "PYG"),
    entry("QAR", 2, "QAR"),
    entry("RON", 2, "RON"),
    entry("RSD", 2, "RSD"),
    entry("RUB", 2, "RUB"),
    entry("RWF", 0, "RWF"),
    entry("SAR", 2, "SAR"),
    entry("SBD", 2, "SBD"),
    entry("SCR", 2, "SCR"),
    entry("SDG", 2, "SDG"),
    entry("SEK", 2, "SEK"),
    entry("SGD", 2, "SGD"),
    entry("SHP", 2, "SHP"),
    entry("SLE", 2, "SLE"),
    entry("SOS", 2, "SOS"),
    entry("SRD", 2, "SRD"),
    entry("SSP", 2, "SSP"),
    entry("STN", 2, "STN"),
    entry("SVC", 2, "SVC"),
    entry("SYP", 2, "SYP"),
    entry("SZL", 2, "SZL"),
    entry("THB", 2, "THB"),
    entry("TJS", 2, "TJS"),
    entry("TMT", 2, "TMT"),
    entry("TND", 3, "TND"),
    entry("TOP", 2, "TOP"),
    entry("TRY", 2, "TRY"),
    entry("TTD", 2, "TTD"),
    entry("TWD", 2, "NT$"),
    entry("TZS", 2, "TZS"),
    entry("UAH", 2, "UAH"),
    entry("UGX", 0, "UGX"),
    entry("USD", 2, "US$"),
    entry("USN", 2, "USN"),
    entry("UYI", 0, "UYI"),
    entry("UYU", 2, "UYU"),
    entry("UYW", 4, "UYW"),
    entry("UZS", 2, "UZS"),
    entry("VED", 2, "VED"),
    entry("VES", 2, "VES"),
    entry("VND", 0, "₫"),
    entry("VUV", 0, "VUV"),
    entry("WST", 2, "WST"),
    entry("XAF", 0, "FCFA"),
    entry("XCD", 2, "EC$"),
    entry("XCG", 2, "XCG"),
    entry("XOF", 0, "XOF"),
    entry("XPF", 0, "CFPF"),
    entry("YER", 2, "YER"),
    entry("ZAR", 2, "ZAR"),
    entry("ZMW", 2, "ZMW"),
    entry("ZWG", 2, "ZWG"),
];

/// Finds the table entry for an upper-case alphabetic code.
pub fn lookup(code: &str) -> Option<&'static Iso4217Entry> {
    CURRENCIES
        .binary_search_by(|e| e.code.cmp(code))
        .ok()
        .map(|idx| &CURRENCIES[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in CURRENCIES.windows(2) {
            assert!(pair[0].code < pair[1].code, "{} before {}", pair[0].code, pair[1].code);
        }
    }

    #[test]
    fn test_codes_are_three_uppercase_letters() {
        for e in CURRENCIES {
            assert_eq!(e.code.len(), 3);
            assert!(e.code.bytes().all(|b| b.is_ascii_uppercase()), "{}", e.code);
        }
    }

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(lookup("MYR").unwrap().symbol, "RM");
        assert_eq!(lookup("USD").unwrap().symbol, "US$");
        assert_eq!(lookup("JPY").unwrap().minor_units, 0);
        assert_eq!(lookup("KWD").unwrap().minor_units, 3);
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert!(lookup("XYZ").is_none());
        assert!(lookup("usd").is_none());
        assert!(lookup("").is_none());
    }
}
