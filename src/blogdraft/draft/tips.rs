//! Writing tips and quotes shown beside the editor. Both lists rotate on a
//! fixed period, so the pick only depends on how much time has passed.

use std::time::Duration;

pub const TIP_PERIOD: Duration = Duration::from_secs(10);
pub const QUOTE_PERIOD: Duration = Duration::from_secs(15);

pub const WRITING_TIPS: [&str; 10] = [
    "Use clear and concise language to keep readers engaged.",
    "Start with a compelling headline that captures attention.",
    "Break content into smaller paragraphs for better readability.",
    "Include relevant images to enhance your blog's visual appeal.",
    "Use subheadings to organize your thoughts and improve structure.",
    "End with a strong call-to-action to engage your readers.",
    "Research your topic thoroughly before writing.",
    "Edit and proofread multiple times before publishing.",
    "Use storytelling techniques to connect with your audience.",
    "Include data and statistics to support your points.",
];

pub const INSPIRATION_QUOTES: [&str; 8] = [
    "Either write something worth reading or do something worth writing. (Benjamin Franklin)",
    "The first draft of anything is garbage. (Ernest Hemingway)",
    "If you want to be a writer, you must do two things above all others: read a lot and write a lot. (Stephen King)",
    "You can make anything by writing. (C.S. Lewis)",
    "Start writing, no matter what. The water does not flow until the faucet is turned on. (Louis L'Amour)",
    "You can't wait for inspiration. You have to go after it with a club. (Jack London)",
    "Write hard and clear about what hurts. (Ernest Hemingway)",
    "The scariest moment is always just before you start. (Stephen King)",
];

/// The tip showing after `elapsed`.
pub fn tip_at(elapsed: Duration) -> &'static str {
    rotate(&WRITING_TIPS, elapsed, TIP_PERIOD)
}

/// The quote showing after `elapsed`.
pub fn quote_at(elapsed: Duration) -> &'static str {
    rotate(&INSPIRATION_QUOTES, elapsed, QUOTE_PERIOD)
}

fn rotate(items: &[&'static str], elapsed: Duration, period: Duration) -> &'static str {
    let step = elapsed.as_secs() / period.as_secs().max(1);
    items[(step % items.len() as u64) as usize]
}
