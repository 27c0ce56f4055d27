//! Reference content for `context://` resources.

/// Chain-of-thought and molecule templates.
pub const COT_MOLECULES: &str = r"# Chain of Thought Templates

## Standard CoT
Q: [Question]
A: Let's think step by step.
1. [Step 1]
2. [Step 2]
Therefore, the answer is [Answer].

## Few-Shot CoT
Q: [Example question]
A: [Worked reasoning]. Therefore, the answer is [Example answer].

Q: [Question]
A:

## Molecular Context Structure
MOLECULE = [INSTRUCTION] + [EXAMPLES] + [CONTEXT] + [NEW INPUT]

Use `get_molecular_template` for a helper that assembles molecules in code.
";

/// Context-engineering layer definitions.
pub const LAYERS: &str = r"# Context Engineering Layers

1. Atoms: Basic units of meaning (Single Prompts).
2. Molecules: Combinations of atoms (Few-Shot Templates).
3. Cells: Functional units with memory (Cell Protocols, Prompt Programs).
4. Organs: Specialized multi-agent structures (Organs, Protocol Shells).
5. Systems: Interconnected networks (Agents).

| Layer | Tool |
|-------|------|
| Molecules | `get_molecular_template` |
| Cells | `get_cell_protocol`, `get_prompt_program` |
| Organs | `get_organ`, `get_protocol_shell` |
";

/// Neural field primitives.
pub const RESONANCE_FIELD: &str = r"# Neural Field Protocols

## Resonance Field
A structure for maintaining context persistence across long interaction horizons.

[FIELD_DEFINITION]
Type: Resonance
Decay_Rate: Low
Attractors: [Core Intent, User Preferences]

## Operations
- Inject: add a pattern to the field with an initial strength.
- Decay: reduce the strength of every pattern each turn.
- Amplify: strengthen patterns that resonate with an attractor.
- Prune: drop patterns whose strength falls below threshold.
";
