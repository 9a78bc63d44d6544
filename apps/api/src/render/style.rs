/// Page stylesheet, inlined into every response.
pub const PAGE_CSS: &str = r#"
body {
    background-color: #e0f7e9;
    color: #333;
    font-family: 'Trebuchet MS', sans-serif;
    margin: 0;
}
.container { max-width: 760px; margin: 0 auto; padding: 24px; }
.primary { color: #333; }
.recommendation-box {
    background-color: #f9fdfc;
    color: #333;
    padding: 20px;
    border-radius: 10px;
    border-left: 5px solid #28a745;
    animation: fadeIn 1s ease-in;
    font-family: 'Trebuchet MS', sans-serif;
}
.resources-box {
    background-color: #f0f8ff;
    color: #333;
    padding: 15px;
    border-radius: 10px;
    border-left: 5px solid #4169e1;
    animation: resourceFadeIn 1.5s ease-in;
    font-family: 'Georgia', serif;
}
.header {
    color: #28a745;
    font-size: 48px;
    font-weight: bold;
    text-align: center;
    margin-bottom: 30px;
    animation: slideIn 1s ease-in;
    font-family: 'Arial', sans-serif;
}
.subheader {
    color: #28a745;
    font-size: 24px;
    margin-top: 20px;
    margin-bottom: 10px;
    font-family: 'Arial', sans-serif;
}
label { display: block; margin-top: 14px; font-weight: bold; }
.hint { font-weight: normal; color: #666; }
button {
    margin-top: 20px;
    padding: 10px 18px;
    border: none;
    background-color: #28a745;
    color: #fff;
    border-radius: 10px;
    font-size: 16px;
    transition: background-color 0.3s ease;
    font-family: 'Verdana', sans-serif;
    cursor: pointer;
}
button:hover { background-color: #a1dfc5; }
input[type="text"], select {
    width: 100%;
    box-sizing: border-box;
    padding: 8px;
    background-color: #f1f9f7;
    border: 2px solid #28a745;
    border-radius: 5px;
    color: #333;
    font-size: 16px;
    font-weight: bold;
}
input[type="text"]:focus {
    border-color: #1f7a33;
    box-shadow: 0 0 0 3px rgba(40, 167, 69, 0.2);
}
[hidden] { display: none; }
.footer { text-align: center; margin-top: 40px; }
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes slideIn {
    from { transform: translateY(-50px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}
@keyframes resourceFadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
.fade-in-text { animation: textFadeIn 2s ease-in-out; }
"#;

/// Toggles the pathway-specific fields without a round trip.
pub const PATHWAY_SCRIPT: &str = r#"
(function () {
    var select = document.getElementById('post_secondary_pathway');
    var jc = document.getElementById('jc-fields');
    var other = document.getElementById('qualification-fields');
    function sync() {
        var opt = select.options[select.selectedIndex];
        var isJc = select.value === 'JC';
        jc.hidden = !isJc;
        other.hidden = isJc;
        if (!isJc) {
            document.getElementById('qualification-label').textContent = opt.dataset.qualification;
            document.getElementById('grade-label').textContent = opt.dataset.grade;
        }
    }
    select.addEventListener('change', sync);
})();
"#;
