//! Writes a `chile_data.csv` fixture so the browser is runnable out of the
//! box. The raw heat/SHU cells deliberately include the malformed shapes the
//! sanitizers exist for: date-corrupted scores, "x/10" fractions, "+"
//! suffixes, SHU ranges, N/A markers, and thousands separators.

use anyhow::{Context, Result};

struct RawVariety {
    cultivar: &'static str,
    species: &'static str,
    varietal: &'static str,
    shu: &'static str,
    heat: &'static str,
    notes: &'static str,
}

const VARIETIES: &[RawVariety] = &[
    RawVariety {
        cultivar: "Aji Amarillo",
        species: "Capsicum baccatum",
        varietal: "Aji",
        shu: "30,000-50,000",
        heat: "6/10",
        notes: "Fruity, berry-like backbone of Peruvian cooking",
    },
    RawVariety {
        cultivar: "Anaheim",
        species: "Capsicum annuum",
        varietal: "New Mexico",
        shu: "500-2,500",
        heat: "2026-02-10",
        notes: "Mild roasting chile, sold green or red",
    },
    RawVariety {
        cultivar: "Banana Pepper",
        species: "Capsicum annuum",
        varietal: "Wax",
        shu: "0-500",
        heat: "1",
        notes: "Sweet and tangy, great pickled",
    },
    RawVariety {
        cultivar: "Bhut Jolokia",
        species: "Capsicum chinense",
        varietal: "Ghost",
        shu: "855,000-1,041,427",
        heat: "9+",
        notes: "Ghost pepper, intense slow-building heat",
    },
    RawVariety {
        cultivar: "Bird's Eye",
        species: "Capsicum frutescens",
        varietal: "Thai",
        shu: "50,000-100,000",
        heat: "8/10",
        notes: "Small and sharp, ubiquitous in Southeast Asia",
    },
    RawVariety {
        cultivar: "Carolina Reaper",
        species: "Capsicum chinense",
        varietal: "Superhot",
        shu: "1,569,300",
        heat: "10",
        notes: "Record holder bred in South Carolina",
    },
    RawVariety {
        cultivar: "Cayenne",
        species: "Capsicum annuum",
        varietal: "Cayenne",
        shu: "30,000-50,000",
        heat: "7",
        notes: "Classic dried and powdered",
    },
    RawVariety {
        cultivar: "Datil",
        species: "Capsicum chinense",
        varietal: "Datil",
        shu: "100,000-300,000",
        heat: "8",
        notes: "St. Augustine specialty, sweet and hot",
    },
    RawVariety {
        cultivar: "Fresno",
        species: "Capsicum annuum",
        varietal: "Fresno",
        shu: "2,500-10,000",
        heat: "4",
        notes: "Brighter, fruitier stand-in for jalape\u{f1}o",
    },
    RawVariety {
        cultivar: "Habanero",
        species: "Capsicum chinense",
        varietal: "Habanero",
        shu: "100,000-350,000",
        heat: "2026-08-10",
        notes: "Floral, apricot notes",
    },
    RawVariety {
        cultivar: "Hatch Green",
        species: "",
        varietal: "New Mexico",
        shu: "1,000-8,000",
        heat: "3",
        notes: "Roasted by the sack every August",
    },
    RawVariety {
        cultivar: "Jalape\u{f1}o",
        species: "Capsicum annuum",
        varietal: "Jalape\u{f1}o",
        shu: "2,500-8,000",
        heat: "5/10",
        notes: "The benchmark medium chile",
    },
    RawVariety {
        cultivar: "Lemon Drop",
        species: "Capsicum baccatum",
        varietal: "Aji",
        shu: "15,000-30,000",
        heat: "5",
        notes: "Citrus-forward Peruvian seasoning pepper",
    },
    RawVariety {
        cultivar: "Pepper X",
        species: "Capsicum chinense",
        varietal: "Superhot",
        shu: "2,693,000",
        heat: "10+",
        notes: "Bred beyond the Reaper",
    },
    RawVariety {
        cultivar: "Pimiento",
        species: "Capsicum annuum",
        varietal: "",
        shu: "100-500",
        heat: "1",
        notes: "Sweet and heart-shaped, the olive stuffing",
    },
    RawVariety {
        cultivar: "Poblano",
        species: "Capsicum annuum",
        varietal: "Ancho",
        shu: "1,000-1,500",
        heat: "3/10",
        notes: "Ancho when dried, earthy and mild",
    },
    RawVariety {
        cultivar: "Rocoto",
        species: "Capsicum pubescens",
        varietal: "Rocoto",
        shu: "30,000-100,000",
        heat: "7",
        notes: "Black seeds, apple-crisp flesh",
    },
    RawVariety {
        cultivar: "Scotch Bonnet",
        species: "Capsicum chinense",
        varietal: "Bonnet",
        shu: "100,000-350,000",
        heat: "N/A",
        notes: "Sweeter sibling of the habanero, Caribbean staple",
    },
    RawVariety {
        cultivar: "Serrano",
        species: "Capsicum annuum",
        varietal: "Serrano",
        shu: "10,000-23,000",
        heat: "6",
        notes: "Crisp and grassy, hotter than jalape\u{f1}o",
    },
    RawVariety {
        cultivar: "Shishito",
        species: "Capsicum annuum",
        varietal: "Shishito",
        shu: "50-200",
        heat: "1/10",
        notes: "One in ten is a surprise",
    },
    RawVariety {
        cultivar: "Tabasco",
        species: "Capsicum frutescens",
        varietal: "Tabasco",
        shu: "30,000-50,000",
        heat: "7.5",
        notes: "Juicy-walled workhorse of vinegar sauces",
    },
    RawVariety {
        cultivar: "Trinidad Moruga Scorpion",
        species: "Capsicum chinense",
        varietal: "Superhot",
        shu: "N/A",
        heat: "10",
        notes: "Held the record in 2012",
    },
];

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "chile_data.csv".to_string());

    let mut writer = csv::Writer::from_path(&path).with_context(|| format!("creating {path}"))?;
    writer.write_record([
        "Cultivar",
        "Species",
        "Varietal",
        "Research-Accepted SHU",
        "0/10",
        "Notes",
    ])?;
    for v in VARIETIES {
        writer.write_record([v.cultivar, v.species, v.varietal, v.shu, v.heat, v.notes])?;
    }
    writer.flush()?;

    println!("Wrote {} varieties to {path}", VARIETIES.len());
    Ok(())
}
