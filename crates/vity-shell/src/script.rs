//! The shell-integration block written into the user's profile.

/// First line of the block; its presence anywhere in the profile means
/// "installed".
pub const INTEGRATION_MARKER: &str = "# Vity shell integration";

/// Trimmed content of the block's last line.
///
/// The block body must never contain a line that trims to this token before
/// its real end, or `reinstall` will stop removing too early.
pub const BLOCK_END: &str = "}";

const FUNCTION_BODY: &str = r#"[[ -n "$VITY_RECORDING" && "$PS1" != "$VITY_RECORDING "* ]] && PS1="$VITY_RECORDING $PS1"
vity() {
    if [[ "$1" == "record" ]]; then
        shift
        PS1="$PS1" command vity record "$@"

    elif [[ "$1" == "do" || "$1" == "chat" ]]; then
        local vity_action="$1"
        shift
        if [[ -n "$VITY_ACTIVE_LOG" && -f "$VITY_ACTIVE_LOG" ]]; then
            command vity -f "$VITY_ACTIVE_LOG" -c "$VITY_ACTIVE_CHAT" "$vity_action" "$@"
        else
            echo "⚠️  No active recording. Use 'vity record' for context."
            command vity "$vity_action" "$@"
        fi

    elif [[ "$1" == "status" ]]; then
        if [[ -n "$VITY_ACTIVE_LOG" ]]; then
            echo "🔴 Recording active:"
            echo "  📝 Terminal log: $VITY_ACTIVE_LOG"
            echo "  💬 Chat history: $VITY_ACTIVE_CHAT"
        else
            echo "⚫ No active recording"
        fi

    elif [[ "$1" == "help" || "$1" == "-h" || "$1" == "--help" ]]; then
        cat << 'VITY_HELP'
🤖 Vity - AI Terminal Assistant

USAGE:
    vity <command> [options] [prompt]

COMMANDS:
    do <prompt>      Generate a shell command (adds to history)
    chat <prompt>    Chat with AI about terminal/coding topics
    record           Start recording session for context
    status           Show current recording status
    config           Show configuration
    config --reset   Reset configuration
    install          Install shell integration
    reinstall        Reinstall shell integration
    help             Show this help message

EXAMPLES:
    vity do "find all python files"
    vity chat "explain this error message"
    vity record
    vity do "deploy the app"  # (with context from recording)
    vity status
    vity config --reset
    vity reinstall

CONTEXT:
    • Use 'vity record' to start capturing session context
    • Commands run during recording provide better AI responses
    • Recording captures both terminal output and chat history
    • Recording indicator (🔴) shows in your prompt
    • Use 'exit' to stop recording
VITY_HELP

    elif [[ -z "$1" ]]; then
        echo "🤖 Vity - AI Terminal Assistant"
        echo ""
        echo "Usage: vity <command> [prompt]"
        echo ""
        echo "Run 'vity help' for commands and examples."

    else
        command vity "$@"
    fi

    history -n 2>/dev/null || true
"#;

/// The full block, from the marker line to the closing brace, newline-terminated.
#[must_use]
pub fn integration_block() -> String {
    format!("{INTEGRATION_MARKER}\n{FUNCTION_BODY}{BLOCK_END}\n")
}
