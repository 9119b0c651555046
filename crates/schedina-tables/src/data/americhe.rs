//! American rows of the bundled country dataset, north and south.

/// (name, code) rows — North and Central America, Caribbean.
pub(crate) const AMERICA_DEL_NORD: &[(&str, &str)] = &[
    ("STATI UNITI", "100000138"),
    ("CANADA", "100000107"),
    ("MESSICO", "100000484"),
    ("GUATEMALA", "100000320"),
    ("BELIZE", "100000084"),
    ("EL SALVADOR", "100000222"),
    ("HONDURAS", "100000340"),
    ("NICARAGUA", "100000558"),
    ("COSTA RICA", "100000188"),
    ("PANAMA", "100000591"),
    ("CUBA", "100000192"),
    ("GIAMAICA", "100000388"),
    ("HAITI", "100000332"),
    ("REPUBBLICA DOMINICANA", "100000214"),
    ("PORTO RICO", "100000630"),
    ("TRINIDAD E TOBAGO", "100000780"),
    ("BARBADOS", "100000052"),
    ("BAHAMAS", "100000044"),
];

/// (name, code) rows — South America.
pub(crate) const AMERICA_DEL_SUD: &[(&str, &str)] = &[
    ("BRASILE", "100000105"),
    ("ARGENTINA", "100000102"),
    ("CILE", "100000152"),
    ("COLOMBIA", "100000170"),
    ("VENEZUELA", "100000862"),
    ("PERU", "100000604"),
    ("ECUADOR", "100000218"),
    ("BOLIVIA", "100000068"),
    ("PARAGUAY", "100000600"),
    ("URUGUAY", "100000858"),
    ("GUYANA", "100000328"),
    ("SURINAME", "100000740"),
    ("GUYANA FRANCESE", "100000254"),
];
