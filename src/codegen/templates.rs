//! Named script snippets composed by the generator.
//!
//! Placeholders use the `__NAME__` convention so they can never collide
//! with JavaScript braces. Snippets that end up inside the single-quoted
//! code-B literal use double quotes exclusively; everything else is free
//! to use either.

/// Outer shell of code A: extract, build code B, deliver, report.
pub const CODE_A_SHELL: &str =
    "(function(){__EXTRACTOR__;var b='__CODE_B__';__DELIVERY__f(b);return 'sessionhop: code B ready'})()";

/// Extractor for `all`: every localStorage entry into `d.l`, every cookie
/// pair into `d.c` (split on the first `=` only, value percent-decoded),
/// plus the page URL in `d.u`.
pub const ALL_EXTRACTOR: &str = "var d={l:{},c:{},u:location.href};for(var i=0;i<localStorage.length;i++){var k=localStorage.key(i);if(k)d.l[k]=localStorage.getItem(k)}document.cookie.split(';').forEach(function(x){x=x.trim();var j=x.indexOf('=');if(j>0){d.c[x.slice(0,j)]=decodeURIComponent(x.slice(j+1))}})";

/// Extractor for single-key presets. Missing values are a hard error:
/// the script logs and returns before any code B exists.
pub const SINGLE_EXTRACTOR: &str = "var u=location.href,v;if(__SOURCE__===\"localStorage\"){v=localStorage.getItem(__KEY__)}else{var m=document.cookie.split(';').find(function(x){return x.trim().indexOf(__PREFIX__)===0});v=m?decodeURIComponent(m.trim().slice(__PREFIX_LEN__)):null}if(v==null){console.error('sessionhop: key '+__KEY__+' not found');return}";

/// Body of code B for `all` presets. `__DATA__` is either a runtime
/// `JSON.stringify` splice (code A) or a literal payload (dry-run).
pub const ALL_CODE_B_BODY: &str = "javascript:(function(){var d=__DATA__;__INJECTOR__;console.log(\"sessionhop: injected\");setTimeout(function(){location.href=d.u},__DELAY_MS__)})()";

/// Body of code B for single-key presets.
pub const SINGLE_CODE_B_BODY: &str = "javascript:(function(){var __DATA__;__INJECTOR__;console.log(\"sessionhop: injected\");setTimeout(function(){location.href=u},__DELAY_MS__)})()";

/// Injector for `all`: write localStorage back verbatim, re-encode every
/// cookie with the bounded lifetime.
pub const ALL_INJECTOR: &str = "Object.keys(d.l).forEach(function(k){localStorage.setItem(k,d.l[k])});Object.keys(d.c).forEach(function(k){document.cookie=k+\"=\"+encodeURIComponent(d.c[k])+\"; path=/; max-age=__MAX_AGE__\"})";

/// Injector for single-key presets; branches on the source literal, so
/// anything that is not `localStorage` takes the cookie path.
pub const SINGLE_INJECTOR: &str = "if(__SOURCE__===\"localStorage\"){localStorage.setItem(k,v)}else{document.cookie=k+\"=\"+encodeURIComponent(v)+\"; path=/; max-age=__MAX_AGE__\"}";

/// The three-tier delivery fallback chain, emitted inline into every
/// code A: `f` native clipboard, `g` hidden textarea + execCommand,
/// `h` manual-copy overlay that auto-dismisses. `h` cannot fail, so the
/// chain never drops its text.
pub const DELIVERY_CHAIN: &str = "var f=function(t){try{if(navigator.clipboard&&window.isSecureContext){navigator.clipboard.writeText(t).then(function(){console.log('sessionhop: copied to clipboard')}).catch(function(){g(t)})}else{g(t)}}catch(e){g(t)}};var g=function(t){try{var a=document.createElement('textarea');a.value=t;a.style.cssText='position:fixed;left:-9999px;top:-9999px;opacity:0';document.body.appendChild(a);a.focus();a.select();var s=document.execCommand('copy');document.body.removeChild(a);if(s){console.log('sessionhop: copied to clipboard (fallback)')}else{h(t)}}catch(e){h(t)}};var h=function(t){var o=document.createElement('div');o.style.cssText='position:fixed;top:50%;left:50%;transform:translate(-50%,-50%);background:#fff;color:#000;border:2px solid #333;border-radius:8px;padding:20px;z-index:2147483647;max-width:80%;max-height:80%;overflow:auto';var p=document.createElement('p');p.textContent='Clipboard unavailable. Select and copy the code below:';var a=document.createElement('textarea');a.readOnly=true;a.value=t;a.style.cssText='width:100%;height:200px;font-family:monospace;font-size:12px';var b=document.createElement('button');b.textContent='Close';b.onclick=function(){o.remove()};o.appendChild(p);o.appendChild(a);o.appendChild(b);document.body.appendChild(o);a.focus();a.select();setTimeout(function(){if(o.parentNode){o.remove()}},__OVERLAY_MS__)};";

/// Substitute `__NAME__` placeholders. Substitutions run in order, so a
/// placeholder introduced by an earlier value is never re-expanded by
/// accident as long as values come from payload data, which cannot
/// contain the `__NAME__` forms used here.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in substitutions {
        out = out.replace(name, value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_all_occurrences() {
        let out = render("__A__ and __A__ and __B__", &[("__A__", "x"), ("__B__", "y")]);
        assert_eq!(out, "x and x and y");
    }

    #[test]
    fn test_code_b_snippets_avoid_single_quotes() {
        // These land inside the single-quoted code-B literal in code A.
        for snippet in [ALL_CODE_B_BODY, SINGLE_CODE_B_BODY, ALL_INJECTOR, SINGLE_INJECTOR] {
            assert!(
                !snippet.contains('\''),
                "code-B snippet must not contain single quotes: {}",
                snippet
            );
        }
    }

    #[test]
    fn test_delivery_chain_tier_order() {
        let f = DELIVERY_CHAIN.find("navigator.clipboard").unwrap();
        let g = DELIVERY_CHAIN.find("execCommand").unwrap();
        let h = DELIVERY_CHAIN.find("Select and copy").unwrap();
        assert!(f < g && g < h);
    }
}
