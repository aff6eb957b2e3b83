//! # Help Text
//!
//! Displayed to the user via the `.help` command.

pub const MAIN: &str = concat!(
    "**🤖 Potolkoff Help**\n",
    "Send a command, or type the command shown next to a button.\n",
    "\n",
    "**📋 Requests**\n",
    "* .request: Order a measurement\n",
    "* .myrequests: Your requests and their status\n",
    "* .cancel: Abort the current form\n",
    "\n",
    "**🏠 About us**\n",
    "* .menu: Main menu\n",
    "* .services: Services and prices\n",
    "* .calculator: Price estimate\n",
    "* .contacts: How to reach us\n",
);

/// Extra section shown to the configured admin.
pub const ADMIN: &str = concat!(
    "\n",
    "**🛠 Admin**\n",
    "* .admin_requests: All requests, newest first\n",
    "* .admin_contact _id_: Customer contacts\n",
    "* .admin_progress _id_: Mark as in progress\n",
    "* .admin_done _id_: Mark as done\n",
);
