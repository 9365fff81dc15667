//! Embedded page templates.

use minijinja::Environment;

/// Build the template environment with all pages registered.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", include_str!("../../templates/index.html"))?;
    env.add_template("filter.html", include_str!("../../templates/filter.html"))?;
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_templates_parse() {
        let env = environment().unwrap();
        assert!(env.get_template("index.html").is_ok());
        assert!(env.get_template("filter.html").is_ok());
    }

    #[test]
    fn test_filter_page_renders_context() {
        let env = environment().unwrap();
        let html = env
            .get_template("filter.html")
            .unwrap()
            .render(context! {
                filters => vec![context! { name => "sepia", label => "Sepia tone effect" }],
                image_id => "abc-123",
                image_data => "data:image/jpeg;base64,AAAA",
            })
            .unwrap();
        assert!(html.contains("abc-123"));
        assert!(html.contains("data:image/jpeg;base64,AAAA"));
        assert!(html.contains("sepia"));
    }
}
