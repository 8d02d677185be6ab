/// Extract the program token from a user-agent.
///
/// Crawlers conventionally put their name in the second `;`-separated
/// fragment of the first parenthesized group:
///
/// `Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)`
///
/// yields `Googlebot`. Any user-agent with such a fragment yields a token,
/// browsers included (`Windows NT 10.0; Win64; x64` gives `Win64`); only
/// tokens listed as tracked crawlers are ever counted.
pub fn crawler_program(ua: &str) -> Option<String> {
    let open = ua.find('(')?;
    let close = open + ua[open..].find(')')?;
    let group = &ua[open + 1..close];

    let fragment = group.split(';').nth(1)?.trim();
    let program = match fragment.find('/') {
        Some(slash) => &fragment[..slash],
        None => fragment,
    };

    if program.is_empty() {
        return None;
    }

    Some(program.to_string())
}
