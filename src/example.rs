/// Sample widget field configuration covering every category.
pub const EXAMPLE_CONFIG: &str = r#"{
  "textSize": {
    "type": "number",
    "value": 5,
    "label": "Text Size"
  },
  "duration": {
    "type": "slider",
    "value": 5,
    "min": 1,
    "max": 30,
    "step": 1,
    "label": "Duration"
  },
  "fontColor": {
    "type": "colorpicker",
    "value": "rgb(255, 255, 255)",
    "label": "Font Color"
  },
  "wiggle": {
    "type": "checkbox",
    "value": true,
    "label": "Enable Wiggle"
  },
  "fontFamily": {
    "type": "googleFont",
    "value": "Roboto",
    "label": "Font Family"
  },
  "alertSound": {
    "type": "sound-input",
    "value": "",
    "label": "Alert Sound"
  },
  "theme": {
    "type": "dropdown",
    "value": "default",
    "label": "Theme",
    "options": {
      "default": "Default",
      "minimal": "Minimal"
    }
  }
}"#;
