//! # Province Catalog
//!
//! The fixed catalog of selectable regions: the 77 Thai provinces plus the
//! Songkhla Lake region carried by the map asset (`lksg`). Catalog order is
//! the canonical display and iteration order everywhere in the toolkit.
//!
//! Identifiers here share a namespace with the `id` attributes of the map
//! asset's region paths, so a map click resolves against this catalog with
//! no translation step.

use serde::Serialize;

use crate::identity::ProvinceId;

/// One catalog entry: a stable region id and its English display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Province {
    /// Stable region identifier (lowercase ASCII, e.g. `bkk`).
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
}

impl Province {
    /// Look up a catalog entry by validated id. Returns `None` for ids that
    /// pass charset validation but name no catalog entry.
    pub fn find(id: &ProvinceId) -> Option<&'static Province> {
        Self::find_str(id.as_str())
    }

    /// Look up a catalog entry by raw string id.
    pub fn find_str(id: &str) -> Option<&'static Province> {
        PROVINCES.iter().find(|province| province.id == id)
    }

    /// The validated id of this entry. Catalog ids are known-good.
    pub fn province_id(&self) -> ProvinceId {
        ProvinceId::from_catalog(self.id)
    }
}

/// Number of catalog entries (77 provinces + the lake region).
pub const PROVINCE_COUNT: usize = 78;

/// The full region catalog, in canonical order.
pub const PROVINCES: &[Province] = &[
    Province { id: "bkk", name: "Bangkok" },
    Province { id: "spk", name: "Samut Prakan" },
    Province { id: "nbi", name: "Nonthaburi" },
    Province { id: "pte", name: "Pathum Thani" },
    Province { id: "aya", name: "Phra Nakhon Si Ayutthaya" },
    Province { id: "atg", name: "Ang Thong" },
    Province { id: "lri", name: "Lop Buri" },
    Province { id: "sbr", name: "Sing Buri" },
    Province { id: "cnt", name: "Chai Nat" },
    Province { id: "sri", name: "Saraburi" },
    Province { id: "cbi", name: "Chon Buri" },
    Province { id: "ryg", name: "Rayong" },
    Province { id: "cti", name: "Chanthaburi" },
    Province { id: "trt", name: "Trat" },
    Province { id: "cco", name: "Chachoengsao" },
    Province { id: "pri", name: "Prachin Buri" },
    Province { id: "nyk", name: "Nakhon Nayok" },
    Province { id: "skw", name: "Sa Kaeo" },
    Province { id: "nma", name: "Nakhon Ratchasima" },
    Province { id: "brm", name: "Buriram" },
    Province { id: "srn", name: "Surin" },
    Province { id: "ssk", name: "Si Sa Ket" },
    Province { id: "ubn", name: "Ubon Ratchathani" },
    Province { id: "yst", name: "Yasothon" },
    Province { id: "cpm", name: "Chaiyaphum" },
    Province { id: "acr", name: "Amnat Charoen" },
    Province { id: "bkn", name: "Bueng Kan" },
    Province { id: "nbp", name: "Nong Bua Lam Phu" },
    Province { id: "kkn", name: "Khon Kaen" },
    Province { id: "udn", name: "Udon Thani" },
    Province { id: "lei", name: "Loei" },
    Province { id: "nki", name: "Nong Khai" },
    Province { id: "mkm", name: "Maha Sarakham" },
    Province { id: "ret", name: "Roi Et" },
    Province { id: "ksn", name: "Kalasin" },
    Province { id: "snk", name: "Sakon Nakhon" },
    Province { id: "npm", name: "Nakhon Phanom" },
    Province { id: "mdh", name: "Mukdahan" },
    Province { id: "cmi", name: "Chiang Mai" },
    Province { id: "lpn", name: "Lamphun" },
    Province { id: "lpg", name: "Lampang" },
    Province { id: "utd", name: "Uttaradit" },
    Province { id: "pre", name: "Phrae" },
    Province { id: "nan", name: "Nan" },
    Province { id: "pyo", name: "Phayao" },
    Province { id: "cri", name: "Chiang Rai" },
    Province { id: "msn", name: "Mae Hong Son" },
    Province { id: "nsn", name: "Nakhon Sawan" },
    Province { id: "uti", name: "Uthai Thani" },
    Province { id: "kpt", name: "Kamphaeng Phet" },
    Province { id: "tak", name: "Tak" },
    Province { id: "sti", name: "Sukhothai" },
    Province { id: "plk", name: "Phitsanulok" },
    Province { id: "pct", name: "Phichit" },
    Province { id: "pnb", name: "Phetchabun" },
    Province { id: "rbr", name: "Ratchaburi" },
    Province { id: "kri", name: "Kanchanaburi" },
    Province { id: "spb", name: "Suphan Buri" },
    Province { id: "npt", name: "Nakhon Pathom" },
    Province { id: "skn", name: "Samut Sakhon" },
    Province { id: "skm", name: "Samut Songkhram" },
    Province { id: "pbi", name: "Phetchaburi" },
    Province { id: "pkn", name: "Prachuap Khiri Khan" },
    Province { id: "nrt", name: "Nakhon Si Thammarat" },
    Province { id: "kbi", name: "Krabi" },
    Province { id: "pna", name: "Phangnga" },
    Province { id: "pkt", name: "Phuket" },
    Province { id: "sni", name: "Surat Thani" },
    Province { id: "rng", name: "Ranong" },
    Province { id: "cpn", name: "Chumphon" },
    Province { id: "ska", name: "Songkhla" },
    Province { id: "stn", name: "Satun" },
    Province { id: "trg", name: "Trang" },
    Province { id: "plg", name: "Phatthalung" },
    Province { id: "ptn", name: "Pattani" },
    Province { id: "yla", name: "Yala" },
    Province { id: "nwt", name: "Narathiwat" },
    Province { id: "lksg", name: "Lake Songkha" },
];
