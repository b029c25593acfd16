use crate::domain::ports::NameSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ADJECTIVES: &[&str] = &[
    "admiring", "adoring", "affectionate", "agitated", "amazing", "angry", "awesome",
    "beautiful", "blissful", "bold", "boring", "brave", "busy", "charming", "clever",
    "compassionate", "competent", "condescending", "confident", "cool", "cranky", "crazy",
    "dazzling", "determined", "distracted", "dreamy", "eager", "ecstatic", "elastic",
    "elated", "elegant", "eloquent", "epic", "exciting", "fervent", "festive", "flamboyant",
    "focused", "friendly", "frosty", "funny", "gallant", "gifted", "goofy", "gracious",
    "great", "happy", "hardcore", "heuristic", "hopeful", "hungry", "infallible",
    "inspiring", "intelligent", "interesting", "jolly", "jovial", "keen", "kind",
    "laughing", "loving", "lucid", "magical", "modest", "musing", "mystifying", "naughty",
    "nervous", "nice", "nifty", "nostalgic", "objective", "optimistic", "peaceful",
    "pedantic", "pensive", "practical", "priceless", "quirky", "quizzical", "recursing",
    "relaxed", "reverent", "romantic", "sad", "serene", "sharp", "silly", "sleepy",
    "stoic", "strange", "stupefied", "suspicious", "sweet", "tender", "thirsty",
    "trusting", "unruffled", "upbeat", "vibrant", "vigilant", "vigorous", "wizardly",
    "wonderful", "xenodochial", "youthful", "zealous", "zen",
];

const SURNAMES: &[&str] = &[
    "agnesi", "albattani", "allen", "almeida", "antonelli", "archimedes", "ardinghelli",
    "aryabhata", "austin", "babbage", "banach", "banzai", "bardeen", "bartik", "bassi",
    "beaver", "bell", "benz", "bhabha", "bhaskara", "black", "blackburn", "blackwell",
    "bohr", "booth", "borg", "bose", "bouman", "boyd", "brahmagupta", "brattain", "brown",
    "buck", "burnell", "cannon", "carson", "cartwright", "carver", "cerf", "chandrasekhar",
    "chaplygin", "chatelet", "chatterjee", "chebyshev", "cohen", "chaum", "clarke",
    "colden", "cori", "cray", "curran", "curie", "darwin", "davinci", "dewdney", "dhawan",
    "diffie", "dijkstra", "dirac", "driscoll", "dubinsky", "easley", "edison", "einstein",
    "elbakyan", "elgamal", "elion", "ellis", "engelbart", "euclid", "euler", "faraday",
    "feistel", "fermat", "fermi", "feynman", "franklin", "gagarin", "galileo", "galois",
    "ganguly", "gates", "gauss", "germain", "goldberg", "goldstine", "goldwasser", "golick",
    "goodall", "gould", "greider", "grothendieck", "haibt", "hamilton", "haslett",
    "hawking", "hellman", "heisenberg", "hermann", "herschel", "hertz", "heyrovsky",
    "hodgkin", "hofstadter", "hoover", "hopper", "hugle", "hypatia", "ishizaka", "jackson",
    "jang", "jemison", "jennings", "jepsen", "johnson", "joliot", "jones", "kalam",
    "kapitsa", "kare", "keldysh", "keller", "kepler", "khayyam", "khorana", "kilby",
    "kirch", "knuth", "kowalevski", "lalande", "lamarr", "lamport", "leakey", "leavitt",
    "lederberg", "lehmann", "lewin", "lichterman", "liskov", "lovelace", "lumiere",
    "mahavira", "margulis", "matsumoto", "maxwell", "mayer", "mccarthy", "mcclintock",
    "mclaren", "mclean", "mcnulty", "meitner", "mendel", "mendeleev", "meninsky", "merkle",
    "mestorf", "mirzakhani", "montalcini", "moore", "morse", "moser", "murdock", "napier",
    "nash", "neumann", "newton", "nightingale", "nobel", "noether", "northcutt", "noyce",
    "panini", "pare", "pascal", "pasteur", "payne", "perlman", "pike", "poincare",
    "poitras", "proskuriakova", "ptolemy", "raman", "ramanujan", "rhodes", "ride",
    "ritchie", "robinson", "roentgen", "rosalind", "rubin", "saha", "sammet", "sanderson",
    "satoshi", "shamir", "shannon", "shaw", "shirley", "shockley", "shtern", "sinoussi",
    "snyder", "solomon", "spence", "stonebraker", "sutherland", "swanson", "swartz",
    "swirles", "taussig", "tesla", "tharp", "thompson", "torvalds", "tu", "turing",
    "varahamihira", "vaughan", "villani", "visvesvaraya", "volhard", "wescoff", "wilbur",
    "wiles", "williams", "williamson", "wilson", "wing", "wozniak", "wright", "wu",
    "yalow", "yonath", "zhukovsky",
];

/// Picks `adjective_surname` pairs from the built-in corpus.
pub struct RandomNames<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomNames<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words[self.rng.random_range(0..words.len())]
    }
}

impl RandomNames<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NameSource for RandomNames<R> {
    fn random_name(&mut self) -> String {
        loop {
            let adjective = self.pick(ADJECTIVES);
            let surname = self.pick(SURNAMES);
            // Steve Wozniak is not boring
            if adjective == "boring" && surname == "wozniak" {
                continue;
            }
            return format!("{}_{}", adjective, surname);
        }
    }
}

/// Turns a display name into something usable as an RFC 1035 label.
pub fn sanitize_label(name: &str) -> String {
    name.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::is_dns_label;

    #[test]
    fn test_corpus_is_lowercase_ascii() {
        for word in ADJECTIVES.iter().chain(SURNAMES.iter()) {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "corpus word {:?} is not lowercase ascii",
                word
            );
        }
    }

    #[test]
    fn test_random_name_shape() {
        let mut names = RandomNames::from_seed(7);
        for _ in 0..200 {
            let name = names.random_name();
            let (adjective, surname) = name.split_once('_').expect("adjective_surname");
            assert!(ADJECTIVES.contains(&adjective));
            assert!(SURNAMES.contains(&surname));
            assert_ne!(name, "boring_wozniak");
            assert!(is_dns_label(&sanitize_label(&name)));
        }
    }

    #[test]
    fn test_same_seed_same_names() {
        let mut a = RandomNames::from_seed(42);
        let mut b = RandomNames::from_seed(42);
        let first: Vec<String> = (0..20).map(|_| a.random_name()).collect();
        let second: Vec<String> = (0..20).map(|_| b.random_name()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sanitize_label() {
        assert_eq!(sanitize_label("admiring_turing"), "admiring-turing");
        assert_eq!(sanitize_label("a_b_c"), "a-b-c");
        assert_eq!(sanitize_label("plain"), "plain");
    }
}
