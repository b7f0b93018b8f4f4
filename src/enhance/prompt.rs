//! Prompt construction for description enhancement

use super::EnhanceInput;

pub const SYSTEM_PROMPT: &str = "You are an expert at writing compelling, professional project \
descriptions for software READMEs.

Given a project name, its original description, the detected technology stack, and detected \
features, rewrite the description so it is clear, engaging, and accurate. If the original \
description is empty or very short, create a suitable one from the technology stack and \
features instead.

Keep it to two or three sentences. Do not invent capabilities that are not implied by the \
inputs. Respond with only the enhanced description text, nothing else.";

/// Renders the user-turn prompt for one enhancement call.
pub fn user_prompt(input: &EnhanceInput) -> String {
    format!(
        "Project Name: {}\n\
         Original Description: {}\n\
         Tech Stack: {}\n\
         Features: {}\n\n\
         Enhanced Description:",
        input.project_name, input.original_description, input.tech_stack, input.features
    )
}
