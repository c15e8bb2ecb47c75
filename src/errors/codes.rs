pub struct ErrorCode;

impl ErrorCode {
    // Engine errors: E1xx
    pub const ENGINE_CONNECTION_FAILED: &'static str = "E100";
    pub const ENGINE_LIST_IMAGES_FAILED: &'static str = "E101";
    pub const ENGINE_LIST_CONTAINERS_FAILED: &'static str = "E102";
    pub const ENGINE_REMOVE_IMAGE_FAILED: &'static str = "E103";
    pub const ENGINE_REMOVE_CONTAINER_FAILED: &'static str = "E104";
    pub const ENGINE_TAG_IMAGE_FAILED: &'static str = "E105";
    pub const ENGINE_INSPECT_IMAGE_FAILED: &'static str = "E106";
    pub const ENGINE_INFO_FAILED: &'static str = "E107";

    // Terminal errors: T1xx
    pub const TERMINAL_LAUNCH_FAILED: &'static str = "T100";

    // Command errors: C1xx
    pub const COMMAND_NODE_NOT_FOUND: &'static str = "C100";
    pub const COMMAND_UNEXPECTED_NODE: &'static str = "C101";
    pub const COMMAND_NO_SELECTION: &'static str = "C102";

    // Settings and config errors: S1xx
    pub const CONFIG_READ_FAILED: &'static str = "S100";
    pub const CONFIG_PARSE_FAILED: &'static str = "S101";
    pub const CONFIG_INVALID: &'static str = "S102";
}
