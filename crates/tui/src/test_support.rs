use ratatui::buffer::Buffer;

/// Rows of a rendered buffer as plain text, styles dropped.
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
	(0..buf.area.height)
		.map(|y| {
			(0..buf.area.width)
				.map(|x| buf[(buf.area.x + x, buf.area.y + y)].symbol())
				.collect()
		})
		.collect()
}

pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
	buffer_lines(buf).join("\n")
}
