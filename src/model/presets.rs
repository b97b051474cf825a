//! Editable starting content for the guidelines and brief template
//! editors. These are scaffolding only; every real constraint comes
//! from what the user types or uploads.

pub const DEFAULT_GUIDELINES: &str = "\
AUDIENCE: [Who the content is for. Be specific.]
KEY USP: [The one thing that sets this product/topic apart.]
NARRATIVE: [The story arc every article should reinforce.]
AVOID: [Framings, claims, or phrases that must not appear.]
USE: [Preferred framings and phrases.]
TONE: [e.g. Authoritative, Educational, 'Typically', 'Tend to be'.]
GOALS: [What success looks like for this content batch.]";

pub const DEFAULT_TEMPLATE: &str = "\
## Metadata
- Target Audience: [Developers, Traders, etc.]
- Tone: [Educational, Authoritative, etc.]
- Goal: [Specific SEO Goal]

## Article Structure
- H1: [Title]
- Slug URL: [slug]
- Intent: [Intent]
- Meta Title / Description: [...]

## Content Outline (Detailed)
- H2: [Topic]
  - Key points to cover...
  - Analogies to use...
- H2: [Topic]...

## Keywords Table
- Keyword | Volume | Notes

## LLM Optimization Notes
- Instructions on how to write the content (transitions, structure, etc.).";
