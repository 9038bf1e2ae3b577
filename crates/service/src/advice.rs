//! Canned scholarship advice for the chat webhook.
//!
//! Incoming text is lower-cased and matched against keyword lists in a fixed
//! order; the first match wins. Matching is plain substring search, so
//! "hi" also matches inside longer words.

use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Undergraduate,
    Graduate,
    International,
    Minorities,
}

impl Category {
    fn heading(self) -> &'static str {
        match self {
            Category::Undergraduate => "Here are some undergraduate scholarships and grants:",
            Category::Graduate => "Here are some graduate scholarships and grants:",
            Category::International => "Here are some scholarships for international students:",
            Category::Minorities => "Here are some scholarships for minority students:",
        }
    }

    fn listings(self) -> &'static [&'static str] {
        match self {
            Category::Undergraduate => &[
                "Pell Grant: Federal grant for undergraduate students with financial need.",
                "Academic Competitive Grant: For first-year and second-year students who completed a rigorous high school program.",
                "SMART Grant: For third-year and fourth-year students in STEM fields.",
                "Federal SEOG: Supplemental Educational Opportunity Grant for students with exceptional financial need.",
            ],
            Category::Graduate => &[
                "TEACH Grant: For students completing coursework to begin a teaching career.",
                "Fulbright Program: International exchange program for graduate students.",
                "NSF Graduate Research Fellowship: For graduate students in STEM fields.",
                "Ford Foundation Fellowship: For diverse Ph.D. students.",
            ],
            Category::International => &[
                "Chevening Scholarship: For international students to study in the UK.",
                "DAAD Scholarship: For international students to study in Germany.",
                "Fulbright Foreign Student Program: For international students to study in the US.",
                "Erasmus Mundus Joint Master Degree: For students to study in multiple European countries.",
            ],
            Category::Minorities => &[
                "United Negro College Fund: For African American students.",
                "Hispanic Scholarship Fund: For Hispanic and Latino students.",
                "American Indian College Fund: For Native American students.",
                "Asian & Pacific Islander American Scholarship Fund: For Asian and Pacific Islander students.",
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Help,
    Category(Category),
    Apply,
    Deadline,
    /// About funding in general but nothing we have a canned answer for.
    Related,
    Unknown,
}

const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "start"];
const RELATED_WORDS: &[&str] = &[
    "scholarship", "grant", "financial aid", "funding", "money", "education", "college", "university", "student", "loan",
];

const WELCOME: &str = "👋 Welcome to the Scholarship Bot! I can help you find scholarships and grants. Try asking about:\n\n\
• Undergraduate scholarships\n\
• Graduate scholarships\n\
• International scholarships\n\
• Scholarships for minorities\n\
• How to apply for scholarships\n\
• Scholarship deadlines\n\
\nOr type 'help' to see this menu again.";

const HELP: &str = "I can provide information about:\n\n\
• Undergraduate scholarships\n\
• Graduate scholarships\n\
• International scholarships\n\
• Scholarships for minorities\n\
• Application processes\n\
• Deadlines\n\
\nJust ask me a question!";

const APPLY_TIPS: &str = "General application tips for scholarships:\n\n\
1. Start early and note all deadlines\n\
2. Prepare required documents (transcripts, letters of recommendation)\n\
3. Write a compelling personal statement\n\
4. Highlight your achievements and community service\n\
5. Apply to multiple scholarships to increase your chances";

const DEADLINES: &str = "Most scholarship deadlines fall into these periods:\n\n\
• Fall scholarships: July - September\n\
• Spring scholarships: October - December\n\
• Summer scholarships: January - March\n\n\
Always check the specific deadlines for each scholarship you're interested in!";

const FALLBACK: &str = "I'm not sure I understand your question about scholarships. \
Try asking about undergraduate, graduate, or international scholarships, \
or type 'help' to see what I can assist with.";

pub fn classify(text: &str) -> Intent {
    let text = text.to_lowercase();
    let has = |word: &str| text.contains(word);

    if GREETING_WORDS.iter().any(|w| text.contains(w)) {
        Intent::Greeting
    } else if has("help") {
        Intent::Help
    } else if has("undergraduate") {
        Intent::Category(Category::Undergraduate)
    } else if has("graduate") {
        Intent::Category(Category::Graduate)
    } else if has("international") {
        Intent::Category(Category::International)
    } else if has("minorities") || has("minority") {
        Intent::Category(Category::Minorities)
    } else if has("apply") || has("application") {
        Intent::Apply
    } else if has("deadline") {
        Intent::Deadline
    } else if RELATED_WORDS.iter().any(|w| text.contains(w)) {
        Intent::Related
    } else {
        Intent::Unknown
    }
}

pub fn reply_for(intent: Intent) -> String {
    match intent {
        Intent::Greeting => WELCOME.to_string(),
        Intent::Help => HELP.to_string(),
        Intent::Category(c) => format!("{}\n\n• {}", c.heading(), c.listings().join("\n• ")),
        Intent::Apply => APPLY_TIPS.to_string(),
        Intent::Deadline => DEADLINES.to_string(),
        Intent::Related | Intent::Unknown => FALLBACK.to_string(),
    }
}

/// Classify `text` and produce the reply.
pub fn respond(text: &str) -> String {
    let intent = classify(text);
    match intent {
        Intent::Related => info!("funding question without a canned answer; sending default reply"),
        _ => debug!(?intent, "advice intent"),
    }
    reply_for(intent)
}
