use super::Decoration;

const PROJECT: &str = "RApp";

const NOTICE: [&str; 3] = [
    " * RApp is a modular web application container made for linux and for speed.\n",
    " * (C) 2013 the RApp devs. Licensed under GPLv2 with additional rights.\n",
    " *     see LICENSE for all the details.\n",
];

const MODELINE: &str = " * vim: expandtab shiftwidth=2 tabstop=2:\n";

const COMMENT_OPEN: &str = "/*\n";
const COMMENT_CLOSE: &str = " */\n";

/// License header and vim modeline used across the RApp sources
pub struct RappDecoration;

impl Decoration for RappDecoration {
    fn header(&self, display_name: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(6);
        lines.push(COMMENT_OPEN.to_string());
        lines.push(format!(" * {display_name} - is part of {PROJECT}.\n"));
        lines.extend(NOTICE.iter().map(|line| line.to_string()));
        lines.push(COMMENT_CLOSE.to_string());
        lines
    }

    fn trailer(&self) -> Vec<String> {
        vec![
            COMMENT_OPEN.to_string(),
            MODELINE.to_string(),
            COMMENT_CLOSE.to_string(),
        ]
    }
}
