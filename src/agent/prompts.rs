//! Prompt templates. Everything here is pure: the same request always yields
//! the same text.

use crate::agent::input_types::{HobbySuggestRequest, Message, WeeklyPlanRequest};

/// System instruction prepended to every `/agent` conversation
pub const UNIFIED_SYSTEM_PROMPT: &str = r#"
You are a unified hobby-engagement agent.

You can perform multiple tasks:
1. Suggest hobbies based on mood, interests, and time availability.
2. Generate detailed 7-day weekly hobby training plans.
3. Provide general hobby guidance or improvements.

You must:
- ALWAYS return structured JSON for the final answer.
- Detect user intent from natural language.

OUTPUT FORMAT (MANDATORY):

{
  "intent": "<detected_intent>",
  "result": <JSON object or array depending on task>
}

Allowed intents:
- "suggest_hobby"
- "weekly_plan"
- "general_advice"

If the user provides insufficient info, ask follow-up questions **inside JSON** like:

{
  "intent": "follow_up",
  "question": "I need to know your mood and time available to suggest hobbies. Please provide these."
}

DO NOT output anything outside JSON.
"#;

/// System message paired with the task-specific templates
pub const TASK_SYSTEM_PROMPT: &str = "You are a structured hobby planning assistant.";

/// `[system prompt] + caller messages`, caller order preserved
pub fn unified_messages(messages: &[Message]) -> Vec<Message> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    out.push(Message::system(UNIFIED_SYSTEM_PROMPT));
    out.extend(messages.iter().cloned());
    out
}

/// Pair a task prompt with the task system message
pub fn task_messages(prompt: String) -> Vec<Message> {
    vec![Message::system(TASK_SYSTEM_PROMPT), Message::user(prompt)]
}

pub fn hobby_suggestion_prompt(req: &HobbySuggestRequest) -> String {
    let mood = req.mood.as_deref().unwrap_or("no particular mood");
    let time = match req.time_available {
        Some(minutes) => format!("{} minutes", minutes),
        None => "a flexible amount of time".to_string(),
    };

    format!(
        r#"Suggest hobbies for a person with the following profile.

Interests: {interests}
Current mood: {mood}
Time available: {time}

Suggest 3 to 5 hobbies that match these interests and mood and that can be
practised within the available time. Respond ONLY with a JSON array in this
exact shape:

[
  {{
    "title": "<hobby name>",
    "description": "<why it fits and how to start>",
    "time_minutes": <integer>
  }}
]"#,
        interests = req.interests,
        mood = mood,
        time = time,
    )
}

pub fn weekly_plan_prompt(req: &WeeklyPlanRequest) -> String {
    let dates = match req.start_date {
        Some(start) => format!(
            "The plan starts on {}. Use consecutive calendar dates in YYYY-MM-DD format.",
            start.format("%Y-%m-%d")
        ),
        None => "Label each date relative to the start, from \"Day 1\" to \"Day 7\".".to_string(),
    };

    format!(
        r#"Create a 7-day practice plan for the hobby "{hobby}".

Expertise level: {level}
Hours available per day: {hours}
{dates}

Each day should build on the previous one and fit within the daily hours.
Respond ONLY with a JSON array of exactly 7 objects in this exact shape:

[
  {{
    "day": "<day name>",
    "date": "<date>",
    "skill_goals": ["<goal>"],
    "tasks": ["<task>"],
    "practice_routines": ["<routine with duration>"],
    "why_it_helps": "<short explanation>"
  }}
]"#,
        hobby = req.hobby,
        level = req.expertise_level,
        hours = req.hours_per_day,
        dates = dates,
    )
}
