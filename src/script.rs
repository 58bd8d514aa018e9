use crate::grub::Entry;

/// Prepended to every override script. When grub-mkconfig runs the script,
/// the second line prints everything after the header.
pub const SCRIPT_HEADER: &str = "#!/bin/sh\nexec tail -n +3 $0\n";

/// Render entries, in order and unmodified, into an override script.
pub fn render_override_script(entries: &[Entry]) -> String {
    let body_len: usize = entries.iter().map(|e| e.content.len()).sum();
    let mut script = String::with_capacity(SCRIPT_HEADER.len() + body_len);
    script.push_str(SCRIPT_HEADER);
    for entry in entries {
        script.push_str(&entry.content);
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grub::parse_menu_entries;

    #[test]
    fn header_then_entries_in_order() {
        let entries = vec![
            Entry::new("B".into(), "menuentry 'B' {\n}\n".into()),
            Entry::new("A".into(), "menuentry 'A' {\n}\n".into()),
        ];
        assert_eq!(
            render_override_script(&entries),
            "#!/bin/sh\nexec tail -n +3 $0\nmenuentry 'B' {\n}\nmenuentry 'A' {\n}\n"
        );
    }

    #[test]
    fn empty_list_is_header_only() {
        assert_eq!(render_override_script(&[]), SCRIPT_HEADER);
    }

    #[test]
    fn header_is_two_lines() {
        let script = render_override_script(&parse_menu_entries("menuentry 'X' {\n}\n"));
        let lines: Vec<_> = script.lines().collect();
        assert_eq!(lines[0], "#!/bin/sh");
        assert_eq!(lines[1], "exec tail -n +3 $0");
        assert_eq!(lines[2], "menuentry 'X' {");
    }
}
