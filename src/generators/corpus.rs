//! Dutch word corpora backing the surrogate generators
//!
//! Small embedded lists; large-scale realism is not a goal, plausibility
//! under casual reading is.

use rand::rngs::StdRng;
use rand::Rng;

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Daan", "Sem", "Lucas", "Levi", "Finn", "Bram", "Milan", "Jesse", "Thijs", "Ruben",
    "Thomas", "Lars", "Tim", "Niels", "Sander", "Joris", "Willem", "Pieter", "Hendrik", "Gijs",
    "Emma", "Julia", "Sophie", "Lotte", "Fleur", "Anna", "Sara", "Eva", "Noor", "Lieke",
    "Femke", "Roos", "Anouk", "Sanne", "Marieke", "Ilse", "Maud", "Esmee", "Johanna", "Willemijn",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "de Jong", "Jansen", "de Vries", "van den Berg", "van Dijk", "Bakker", "Visser", "Smit",
    "Meijer", "de Boer", "Mulder", "de Groot", "Bos", "Vos", "Peters", "Hendriks",
    "van Leeuwen", "Dekker", "Brouwer", "de Wit", "Dijkstra", "Smits", "de Graaf", "van der Meer",
    "Kok", "Jacobs", "Vermeulen", "van den Heuvel", "van der Veen", "van den Broek", "de Bruijn",
    "Schouten", "van Beek", "Willems", "van Vliet", "Hoekstra", "Maas", "Verhoeven", "Koster",
    "Prins",
];

pub(crate) const CITIES: &[&str] = &[
    "Amsterdam", "Rotterdam", "Den Haag", "Utrecht", "Eindhoven", "Groningen", "Tilburg",
    "Almere", "Breda", "Nijmegen", "Apeldoorn", "Arnhem", "Haarlem", "Enschede", "Amersfoort",
    "Zaanstad", "Zwolle", "Leiden", "Maastricht", "Dordrecht", "Ede", "Alphen aan den Rijn",
    "Leeuwarden", "Alkmaar", "Emmen", "Delft", "Venlo", "Deventer", "Helmond", "Heerlen",
];

pub(crate) const STREETS: &[&str] = &[
    "Kerkstraat", "Schoolstraat", "Molenweg", "Dorpsstraat", "Stationsstraat", "Julianastraat",
    "Wilhelminastraat", "Beatrixstraat", "Emmastraat", "Sportlaan", "Industrieweg", "Parallelweg",
    "Nieuwstraat", "Molenstraat", "Beukenlaan", "Lindelaan", "Eikenlaan", "Prins Bernhardstraat",
    "Burgemeester de Vlugtlaan", "Oranjelaan", "Meidoornstraat", "Hoofdstraat", "Zuiderdiep",
    "Westerkade",
];

pub(crate) const HOSPITAL_BASES: &[&str] = &[
    "Sint Antonius", "Sint Anna", "Sint Lucas", "Sint Franciscus", "Diaconessen",
    "De Linde", "Havenzicht", "Parkstad", "Rijnland", "Maasvallei", "Noorderlicht",
    "Groene Hart", "Veluwe", "Amstelland",
];

pub(crate) const HOSPITAL_SUFFIXES: &[&str] = &[" Ziekenhuis", " Medisch Centrum", " Kliniek"];

pub(crate) const MONTHS_FULL: [&str; 12] = [
    "januari", "februari", "maart", "april", "mei", "juni",
    "juli", "augustus", "september", "oktober", "november", "december",
];

pub(crate) const MONTHS_ABBR: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun",
    "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Hour words indexed 0..12, where 0 maps to "twaalf" so hour 12 and hour 0
/// share a word under circular indexing.
pub(crate) const HOUR_WORDS: [&str; 12] = [
    "twaalf", "één", "twee", "drie", "vier", "vijf",
    "zes", "zeven", "acht", "negen", "tien", "elf",
];

/// Pick one entry from a non-empty slice
pub(crate) fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}
