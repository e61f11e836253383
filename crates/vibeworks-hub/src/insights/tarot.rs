use super::seed::user_seed;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arcana {
    Major,
}

struct ArcanaEntry {
    name: &'static str,
    emoji: &'static str,
    meaning: &'static str,
    business_meaning: &'static str,
}

/// Upright text only; reversed readings are derived from it.
static MAJOR_ARCANA: [ArcanaEntry; 22] = [
    ArcanaEntry {
        name: "The Fool",
        emoji: "🃏",
        meaning: "New beginnings, spontaneity, faith in the universe",
        business_meaning: "Take calculated risks. Innovation over convention. Trust your entrepreneurial instincts.",
    },
    ArcanaEntry {
        name: "The Magician",
        emoji: "🎩",
        meaning: "Manifestation, resourcefulness, power",
        business_meaning: "You have all the tools you need. Execute with confidence. Turn ideas into reality.",
    },
    ArcanaEntry {
        name: "The High Priestess",
        emoji: "🔮",
        meaning: "Intuition, sacred knowledge, divine feminine",
        business_meaning: "Trust your gut. Hidden information will reveal itself. Listen more than you speak.",
    },
    ArcanaEntry {
        name: "The Empress",
        emoji: "👑",
        meaning: "Abundance, nurturing, creativity",
        business_meaning: "Nurture your projects. Abundance is flowing. Creative solutions to business problems.",
    },
    ArcanaEntry {
        name: "The Emperor",
        emoji: "⚔️",
        meaning: "Authority, structure, control",
        business_meaning: "Establish structure and systems. Lead with authority. Strategic planning pays off.",
    },
    ArcanaEntry {
        name: "The Hierophant",
        emoji: "📿",
        meaning: "Tradition, conformity, education",
        business_meaning: "Follow proven systems. Seek mentorship. Traditional approaches work today.",
    },
    ArcanaEntry {
        name: "The Lovers",
        emoji: "💕",
        meaning: "Choices, partnerships, alignment",
        business_meaning: "Important partnerships forming. Choose collaborators wisely. Alignment creates success.",
    },
    ArcanaEntry {
        name: "The Chariot",
        emoji: "🏇",
        meaning: "Determination, willpower, victory",
        business_meaning: "Push forward aggressively. Victory through determination. Control competing priorities.",
    },
    ArcanaEntry {
        name: "Strength",
        emoji: "🦁",
        meaning: "Courage, patience, compassion",
        business_meaning: "Lead with compassion. Patience yields results. Inner strength over force.",
    },
    ArcanaEntry {
        name: "The Hermit",
        emoji: "🕯️",
        meaning: "Introspection, solitude, wisdom",
        business_meaning: "Strategic solitude. Deep thinking required. Withdraw to gain clarity before acting.",
    },
    ArcanaEntry {
        name: "Wheel of Fortune",
        emoji: "☸️",
        meaning: "Cycles, destiny, turning points",
        business_meaning: "Major shifts incoming. Adapt to change. Cycles turning in your favor.",
    },
    ArcanaEntry {
        name: "Justice",
        emoji: "⚖️",
        meaning: "Fairness, truth, cause and effect",
        business_meaning: "Fair dealings bring success. Contracts and legal matters favored. Truth prevails.",
    },
    ArcanaEntry {
        name: "The Hanged Man",
        emoji: "🙃",
        meaning: "Pause, surrender, new perspective",
        business_meaning: "Strategic pause before acting. See problems from new angle. Surrender control to gain it.",
    },
    ArcanaEntry {
        name: "Death",
        emoji: "💀",
        meaning: "Transformation, endings, new beginnings",
        business_meaning: "End what no longer serves you. Transformation brings growth. Kill old business models.",
    },
    ArcanaEntry {
        name: "Temperance",
        emoji: "🧘",
        meaning: "Balance, moderation, patience",
        business_meaning: "Balance competing priorities. Moderate approach wins. Patience with processes.",
    },
    ArcanaEntry {
        name: "The Devil",
        emoji: "😈",
        meaning: "Bondage, materialism, temptation",
        business_meaning: "Break limiting beliefs. Avoid material obsession. Freedom from business constraints.",
    },
    ArcanaEntry {
        name: "The Tower",
        emoji: "🏰",
        meaning: "Upheaval, sudden change, revelation",
        business_meaning: "Disruptive innovation. Sudden market shifts. Rebuild stronger from chaos.",
    },
    ArcanaEntry {
        name: "The Star",
        emoji: "⭐",
        meaning: "Hope, inspiration, renewal",
        business_meaning: "Vision and hope guide you. Inspire your team. Renewed optimism attracts opportunities.",
    },
    ArcanaEntry {
        name: "The Moon",
        emoji: "🌙",
        meaning: "Illusion, intuition, uncertainty",
        business_meaning: "Not all is as it seems. Trust intuition over data. Navigate uncertainty with care.",
    },
    ArcanaEntry {
        name: "The Sun",
        emoji: "☀️",
        meaning: "Success, vitality, joy",
        business_meaning: "Peak success and visibility. Everything illuminated. Maximum confidence and energy.",
    },
    ArcanaEntry {
        name: "Judgment",
        emoji: "📯",
        meaning: "Reflection, reckoning, awakening",
        business_meaning: "Evaluate past decisions. Second chances available. Strategic pivots favored.",
    },
    ArcanaEntry {
        name: "The World",
        emoji: "🌍",
        meaning: "Completion, achievement, fulfillment",
        business_meaning: "Major milestone achieved. Celebrate success. One cycle ends, another begins.",
    },
];

/// A drawn card, with reversed text already applied when `reversed` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotCard {
    pub name: &'static str,
    pub arcana: Arcana,
    pub meaning: String,
    pub business_meaning: String,
    pub reversed: bool,
    pub emoji: &'static str,
}

pub fn reversed_meaning(upright: &str) -> String {
    format!("(Reversed) {upright} - blocked or inverted energy")
}

pub fn reversed_business_meaning(upright: &str) -> String {
    format!("(Reversed) Obstacles or delays in: {}", upright.to_lowercase())
}

/// Sum of the ISO date components, e.g. 2024-01-01 -> 2026.
fn date_seed(date: NaiveDate) -> u64 {
    u64::from(date.year().unsigned_abs()) + u64::from(date.month()) + u64::from(date.day())
}

pub fn tarot_seed(date: NaiveDate, user_id: Option<&str>) -> u64 {
    let seed = date_seed(date);
    match user_seed(user_id) {
        Some(user) => seed.wrapping_mul(user),
        None => seed,
    }
}

/// Card of the day. The same `(date, user_id)` pair always draws the same card
/// and orientation.
pub fn daily_tarot(date: NaiveDate, user_id: Option<&str>) -> TarotCard {
    let seed = tarot_seed(date, user_id);
    let entry = &MAJOR_ARCANA[(seed % MAJOR_ARCANA.len() as u64) as usize];
    let reversed = seed % 2 == 0;

    let (meaning, business_meaning) = if reversed {
        (
            reversed_meaning(entry.meaning),
            reversed_business_meaning(entry.business_meaning),
        )
    } else {
        (
            entry.meaning.to_string(),
            entry.business_meaning.to_string(),
        )
    };

    TarotCard {
        name: entry.name,
        arcana: Arcana::Major,
        meaning,
        business_meaning,
        reversed,
        emoji: entry.emoji,
    }
}
