//! Central-Italy rows of the bundled municipality dataset.

/// (name, code, province) rows — centro.
pub(crate) const COMUNI_CENTRO: &[(&str, &str, &str)] = &[
    // ── Toscana ───────────────────────────────────────────────────────
    ("FIRENZE", "409048017", "FI"),
    ("PISA", "409050001", "PI"),
    ("SIENA", "409052001", "SI"),
    ("LUCCA", "409046001", "LU"),
    ("VIAREGGIO", "409046002", "LU"),
    ("LIVORNO", "409049001", "LI"),
    ("AREZZO", "409051001", "AR"),
    ("PISTOIA", "409047001", "PT"),
    ("PRATO", "409100001", "PO"),
    ("GROSSETO", "409053001", "GR"),
    ("MASSA", "409045001", "MS"),
    ("CARRARA", "409045002", "MS"),
    // ── Umbria ────────────────────────────────────────────────────────
    ("PERUGIA", "410054001", "PG"),
    ("ASSISI", "410054002", "PG"),
    ("FOLIGNO", "410054003", "PG"),
    ("TERNI", "410055001", "TR"),
    ("ORVIETO", "410055002", "TR"),
    // ── Marche ────────────────────────────────────────────────────────
    ("ANCONA", "411042001", "AN"),
    ("PESARO", "411041001", "PU"),
    ("URBINO", "411041002", "PU"),
    ("MACERATA", "411043001", "MC"),
    ("ASCOLI PICENO", "411044001", "AP"),
    ("FERMO", "411109001", "FM"),
    // ── Lazio ─────────────────────────────────────────────────────────
    ("ROMA", "458100001", "RM"),
    ("FIUMICINO", "458100002", "RM"),
    ("TIVOLI", "458100003", "RM"),
    ("CIVITAVECCHIA", "458100004", "RM"),
    ("LATINA", "412059001", "LT"),
    ("FROSINONE", "412060001", "FR"),
    ("VITERBO", "412056001", "VT"),
    ("RIETI", "412057001", "RI"),
    // ── Abruzzo / Molise ──────────────────────────────────────────────
    ("L'AQUILA", "413066001", "AQ"),
    ("PESCARA", "413068001", "PE"),
    ("CHIETI", "413069001", "CH"),
    ("TERAMO", "413067001", "TE"),
    ("CAMPOBASSO", "414070001", "CB"),
    ("ISERNIA", "414094001", "IS"),
];
