// ABOUTME: Built-in trigger tables for the full-page assistant and the floating widget
// ABOUTME: Reply templates substitute snapshot numbers and profile goals at render time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::rules::{FallbackRule, TriggerRule, TriggerTable};
use super::snapshot::{format_amount, ResponseContext};
use std::fmt::Write;

/// Share of the daily calorie target per meal slot shown by the widget
const MEAL_SPLIT: [(&str, f64); 4] = [
    ("Breakfast", 0.25),
    ("Lunch", 0.30),
    ("Dinner", 0.35),
    ("Snacks", 0.10),
];

/// Table used by the full-page assistant
#[must_use]
pub fn assistant_table() -> TriggerTable {
    TriggerTable::new(
        "assistant",
        vec![
            TriggerRule {
                id: "breakfast",
                triggers: &["what should i eat for breakfast"],
                render: assistant_breakfast,
                suggestions: &["Log this meal", "Show me lunch ideas", "Calculate macros"],
            },
            TriggerRule {
                id: "protein",
                triggers: &["how can i increase my protein intake"],
                render: assistant_protein,
                suggestions: &[
                    "Show me protein-rich recipes",
                    "Calculate my needs",
                    "Log protein foods",
                ],
            },
            TriggerRule {
                id: "post_workout",
                triggers: &["what's a good post-workout meal"],
                render: assistant_post_workout,
                suggestions: &[
                    "Log post-workout meal",
                    "Show me pre-workout options",
                    "Calculate timing",
                ],
            },
            TriggerRule {
                id: "calories",
                triggers: &["how many calories should i eat"],
                render: assistant_calories,
                suggestions: &[
                    "Show me meal suggestions",
                    "Calculate my BMR",
                    "Track my progress",
                ],
            },
            TriggerRule {
                id: "meal_prep",
                triggers: &["give me meal prep ideas"],
                render: assistant_meal_prep,
                suggestions: &["Show me recipes", "Calculate shopping list", "Set reminders"],
            },
        ],
        FallbackRule {
            render: assistant_fallback,
            suggestions: &["Meal planning", "Nutrition advice", "Food suggestions"],
        },
    )
}

/// Table used by the floating chat widget
#[must_use]
pub fn widget_table() -> TriggerTable {
    TriggerTable::new(
        "widget",
        vec![
            TriggerRule {
                id: "breakfast",
                triggers: &["breakfast", "morning"],
                render: widget_breakfast,
                suggestions: &["Log this breakfast", "Give me a meal plan for today"],
            },
            TriggerRule {
                id: "calories",
                triggers: &["calorie", "calories"],
                render: widget_calories,
                suggestions: &["Give me a meal plan for today", "Help me track my water intake"],
            },
            TriggerRule {
                id: "meal_plan",
                triggers: &["meal plan", "plan"],
                render: widget_meal_plan,
                suggestions: &["Add to meal planner", "How many calories should I eat?"],
            },
            TriggerRule {
                id: "workout",
                triggers: &["workout", "exercise"],
                render: widget_workout,
                suggestions: &["Log post-workout snack", "Help me track my water intake"],
            },
            TriggerRule {
                id: "hydration",
                triggers: &["water", "hydration"],
                render: widget_hydration,
                suggestions: &["Log a glass of water", "Set hydration reminders"],
            },
        ],
        FallbackRule {
            render: widget_fallback,
            suggestions: &[
                "Suggest a healthy breakfast",
                "Give me a meal plan for today",
                "Help me track my water intake",
            ],
        },
    )
}

fn goals_clause(ctx: &ResponseContext<'_>) -> Option<String> {
    ctx.profile
        .goals_phrase()
        .map(|goals| format!("Since you're aiming for {goals}"))
}

fn restrictions_note(ctx: &ResponseContext<'_>) -> String {
    ctx.restrictions_phrase().map_or_else(String::new, |r| {
        format!("\n\n🥗 I've kept your dietary preferences ({r}) in mind - swap ingredients where needed.")
    })
}

fn assistant_breakfast(ctx: &ResponseContext<'_>) -> String {
    let remaining = ctx.snapshot.remaining_calories();
    let budget = if remaining >= 0.0 {
        format!("You have {} calories left for today.", format_amount(remaining))
    } else {
        format!(
            "You've reached your calorie goal for today ({} calories over), so keep breakfast tomorrow on the lighter side.",
            format_amount(-remaining)
        )
    };
    let lead = goals_clause(ctx).map_or_else(
        || "I recommend the Greek yogurt option".to_owned(),
        |clause| format!("{clause}, I recommend the Greek yogurt option"),
    );
    format!(
        "Based on your goals and current nutrition data, here are some great breakfast options:

🌅 **High-Protein Options:**
• Greek yogurt with berries and nuts (320 cal, 18g protein)
• Scrambled eggs with avocado toast (380 cal, 16g protein)
• Protein smoothie with banana and almond butter (280 cal, 20g protein)

{lead} - it's high in protein, moderate in calories, and will keep you full until lunch! \
{budget}{}",
        restrictions_note(ctx)
    )
}

fn assistant_protein(ctx: &ResponseContext<'_>) -> String {
    let s = ctx.snapshot;
    let status = if s.remaining_protein_g() > 0.0 {
        format!(
            "Your goal is {}g, so you need {}g more.",
            format_amount(s.protein_target_g),
            format_amount(s.remaining_protein_g())
        )
    } else {
        format!(
            "You've already reached your {}g goal - nice work!",
            format_amount(s.protein_target_g)
        )
    };
    format!(
        "Great question! Here are effective ways to boost your protein intake:

🥩 **High-Protein Foods:**
• Chicken breast (31g protein per 100g)
• Greek yogurt (23g protein per cup)
• Salmon (25g protein per 100g)
• Eggs (6g protein per egg)
• Tuna (30g protein per 100g)

📊 **Your Current Status:**
You're currently at {}g protein today. {status}

💡 **Quick Tips:**
• Add protein powder to smoothies
• Snack on Greek yogurt or cottage cheese
• Include lean meat in every meal
• Try protein-rich snacks like almonds or edamame{}",
        format_amount(s.protein_g),
        restrictions_note(ctx)
    )
}

fn assistant_post_workout(ctx: &ResponseContext<'_>) -> String {
    format!(
        "Perfect timing! Here's what you should eat after your workout:

⏰ **Timing:** Eat within 30-60 minutes after exercise

🍽️ **Ideal Post-Workout Meals:**
• Grilled chicken with sweet potato (450 cal, 35g protein)
• Protein shake with banana (280 cal, 25g protein)
• Greek yogurt with granola and berries (320 cal, 20g protein)
• Tuna sandwich on whole grain bread (380 cal, 28g protein)

🎯 **Macro Breakdown:**
• Protein: 20-30g (for muscle repair)
• Carbs: 30-60g (to replenish glycogen)
• Fat: 10-15g (for satiety)

Since you're currently at {} calories today, any of these options would fit well into your daily plan!",
        format_amount(ctx.snapshot.calories_kcal)
    )
}

fn assistant_calories(ctx: &ResponseContext<'_>) -> String {
    let s = ctx.snapshot;
    let mut reply = format!(
        "Based on your profile and goals, here's your personalized calorie breakdown:

📊 **Your Daily Targets:**
• **Total Calories:** {} calories
• **Protein:** {}g
• **Carbs:** {}g
• **Fat:** {}g",
        format_amount(s.calorie_goal),
        format_amount(s.protein_target_g),
        format_amount(s.carbs_target_g),
        format_amount(s.fat_target_g),
    );

    if let Some(clause) = goals_clause(ctx) {
        let _ = write!(
            reply,
            "\n\n🎯 **Goal-Specific Note:**\n{clause}, keep protein high and adjust portions gradually."
        );
    }

    let progress = s
        .calorie_progress_pct()
        .map_or_else(String::new, |pct| format!(" ({}% of your goal)", pct.round()));
    let _ = write!(
        reply,
        "\n\n💡 **Current Status:**\nYou've consumed {} calories today{progress}.",
        format_amount(s.calories_kcal)
    );

    let remaining = s.remaining_calories();
    if remaining >= 0.0 {
        let _ = write!(
            reply,
            "\n\n**Recommendation:** You have {} calories remaining. Focus on protein-rich foods to round out the day!",
            format_amount(remaining)
        );
    } else {
        let _ = write!(
            reply,
            "\n\n**Recommendation:** You're {} calories over your goal. Keep the rest of today light and vegetable-based.",
            format_amount(-remaining)
        );
    }
    reply
}

fn assistant_meal_prep(ctx: &ResponseContext<'_>) -> String {
    format!(
        "Excellent! Here are some meal prep ideas perfect for your goals:

🍳 **Sunday Meal Prep Plan:**

**Breakfast Prep:**
• Overnight oats with protein powder (5 servings)
• Egg muffins with vegetables (6 servings)
• Greek yogurt parfaits (5 servings)

**Lunch Prep:**
• Grilled chicken with quinoa and roasted vegetables (5 servings)
• Turkey and avocado wraps (5 servings)
• Lentil soup with whole grain bread (5 servings)

**Dinner Prep:**
• Baked salmon with sweet potato and broccoli (5 servings)
• Lean beef stir-fry with brown rice (5 servings)
• Vegetarian chili with beans (5 servings)

**Snacks:**
• Protein balls (10 servings)
• Hummus with carrot sticks (5 servings)
• Hard-boiled eggs (10 servings)

⏰ **Prep Time:** 2-3 hours on Sunday
📦 **Storage:** Refrigerate for 5 days, freeze extras

This plan helps you hit {}g of protein a day while staying within your {} calorie budget!{}",
        format_amount(ctx.snapshot.protein_target_g),
        format_amount(ctx.snapshot.calorie_goal),
        restrictions_note(ctx)
    )
}

fn assistant_fallback(utterance: &str, ctx: &ResponseContext<'_>) -> String {
    format!(
        "I understand you're asking about \"{utterance}\". Let me help you with that!

Based on your current nutrition data ({} calories, {}g protein today), here are some personalized suggestions:

💡 **General Tips:**
• Focus on whole, unprocessed foods
• Include protein with every meal
• Stay hydrated (aim for 8-10 glasses of water)
• Plan your meals ahead of time

Would you like me to help you with meal planning, nutrition calculations, or specific food recommendations?",
        format_amount(ctx.snapshot.calories_kcal),
        format_amount(ctx.snapshot.protein_g)
    )
}

fn widget_breakfast(ctx: &ResponseContext<'_>) -> String {
    format!(
        "Here's a healthy breakfast suggestion for you:

🥣 **Oatmeal Power Bowl**
• 1/2 cup rolled oats
• 1/2 cup almond milk
• 1 tbsp chia seeds
• 1/4 cup mixed berries
• 1 tbsp honey

**Nutrition:** ~250 calories, 8g protein, 45g carbs, 6g fat

This will give you sustained energy throughout the morning! 💪{}",
        restrictions_note(ctx)
    )
}

fn widget_calories(ctx: &ResponseContext<'_>) -> String {
    let goal = ctx.snapshot.calorie_goal;
    let mut reply = format!(
        "Based on your profile, here's your calorie guidance:

📊 **Daily Calorie Target:** {} calories

**Breakdown:**",
        format_amount(goal)
    );
    for (slot, share) in MEAL_SPLIT {
        let _ = write!(reply, "\n• {slot}: {} calories", format_amount((goal * share).round()));
    }
    reply.push_str(
        "\n\nRemember: This is a starting point - adjust based on your activity level and goals! 🎯",
    );
    reply
}

fn widget_meal_plan(_ctx: &ResponseContext<'_>) -> String {
    "Here's a balanced meal plan for today:

🌅 **Breakfast (8:00 AM)**
Greek yogurt with granola and berries

🌞 **Lunch (12:30 PM)**
Grilled chicken salad with mixed greens

🌆 **Dinner (7:00 PM)**
Salmon with quinoa and roasted vegetables

🍎 **Snacks**
• Apple with almond butter
• Carrot sticks with hummus

Would you like me to add these to your meal planner? 📅"
        .to_owned()
}

fn widget_workout(_ctx: &ResponseContext<'_>) -> String {
    "Great question! Here are some excellent post-workout snack options:

💪 **High Protein Options:**
• Greek yogurt with banana
• Protein shake with berries
• Tuna on whole grain toast

🍌 **Quick & Easy:**
• Banana with peanut butter
• Cottage cheese with fruit
• Hard-boiled eggs

**Timing:** Eat within 30 minutes of your workout for best results! ⏰"
        .to_owned()
}

fn widget_hydration(ctx: &ResponseContext<'_>) -> String {
    let s = ctx.snapshot;
    format!(
        "Let's talk hydration! 💧

**Your Daily Goal:** {}L (8 glasses)
**Currently Consumed:** {}L
**Remaining:** {}L

**Tips to stay hydrated:**
• Start your day with a glass of water
• Keep a water bottle with you
• Set reminders on your phone
• Add lemon or cucumber for flavor

You're doing great! Keep it up! 🌊",
        format_amount(s.water_target_l),
        format_amount(s.water_l),
        format_amount(s.remaining_water_l())
    )
}

fn widget_fallback(utterance: &str, ctx: &ResponseContext<'_>) -> String {
    format!(
        "Thanks for your question about \"{utterance}\"! I'm here to help with your nutrition journey. 🤖

So far today you've had {} calories and {}g protein.

I can assist with:
• Personalized meal suggestions
• Nutrition calculations
• Health tips and advice
• Recipe recommendations

Feel free to ask me anything about nutrition, meal planning, or healthy eating habits! 💚",
        format_amount(ctx.snapshot.calories_kcal),
        format_amount(ctx.snapshot.protein_g)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_well_formed() {
        assert!(assistant_table().validate().is_ok());
        assert!(widget_table().validate().is_ok());
    }

    #[test]
    fn test_table_order() {
        let ids: Vec<&str> = assistant_table().rules().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec!["breakfast", "protein", "post_workout", "calories", "meal_prep"]
        );
        let ids: Vec<&str> = widget_table().rules().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec!["breakfast", "calories", "meal_plan", "workout", "hydration"]
        );
    }
}
