pub const MAP_HTML: &str = r#"<!doctype html>
<html lang="de">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>München: Offene Werkstätten und Garage42 Orte</title>

  <!-- deck.gl + JSON converter -->
  <script src="https://unpkg.com/deck.gl@9.0.36/dist.min.js"></script>
  <script src="https://unpkg.com/@deck.gl/json@9.0.36/dist.min.js"></script>

  <!-- MapLibre basemap -->
  <script src="https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.js"></script>
  <link rel="stylesheet" href="https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.css" />

  <style>
    html,
    body {
      margin: 0;
      height: 100%;
      font-family: system-ui, sans-serif;
      background: #f4f4f2;
    }

    header {
      position: absolute;
      z-index: 10;
      top: 0;
      left: 0;
      right: 0;
      padding: 10px 16px;
      background: rgba(255, 255, 255, 0.88);
      border-bottom: 1px solid #d8d8d4;
    }

    header h1 {
      margin: 0;
      font-size: 18px;
      font-weight: 600;
      color: #1f2933;
    }

    #map {
      position: absolute;
      inset: 0;
    }

    #status {
      position: absolute;
      z-index: 10;
      bottom: 10px;
      left: 16px;
      font-size: 12px;
      color: #52606d;
    }
  </style>
</head>

<body>
  <header>
    <h1>München: Offene Werkstätten und Garage42 Orte</h1>
  </header>
  <div id="map"></div>
  <div id="status">Lade Karte …</div>

  <script>
    // The `light` style name used by the scene spec maps onto the CARTO
    // Positron basemap, same as the deck.gl default.
    const MAP_STYLES = {
      light: 'https://basemaps.cartocdn.com/gl/positron-gl-style/style.json',
      dark: 'https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json'
    };

    const status = document.getElementById('status');

    async function init() {
      let spec;
      try {
        const response = await fetch('/scene.json');
        if (!response.ok) {
          throw new Error(await response.text());
        }
        spec = await response.json();
      } catch (error) {
        console.error('scene fetch failed', error);
        status.textContent = 'Szene konnte nicht geladen werden: ' + error.message;
        return;
      }

      const converter = new deck.JSONConverter({
        configuration: new deck.JSONConfiguration({ classes: deck })
      });
      const props = converter.convert({
        initialViewState: spec.initialViewState,
        layers: spec.layers
      });

      new deck.DeckGL({
        container: 'map',
        map: maplibregl,
        mapStyle: MAP_STYLES[spec.mapStyle] || MAP_STYLES.light,
        controller: true,
        getTooltip: ({ object }) =>
          object && spec.tooltip
            ? spec.tooltip.text.replace('{tags}', object.tags ?? '')
            : null,
        ...props
      });

      const rows = spec.layers.reduce(
        (sum, layer) => sum + (layer.data ? layer.data.length : 0),
        0
      );
      status.textContent = spec.layers.length + ' Ebenen, ' + rows + ' Einträge';
    }

    init();
  </script>
</body>

</html>
"#;
